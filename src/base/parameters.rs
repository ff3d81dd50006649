use serde::{Deserialize, Serialize};

/// Holds the material parameters of the brittle solid
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamMaterial {
    /// Young's modulus
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Fracture toughness (critical energy release rate) Gc
    pub gc: f64,

    /// Regularization length ℓ (width of the diffuse damage band)
    pub ell: f64,

    /// Residual stiffness k_ℓ keeping the fully damaged material from becoming singular
    pub k_ell: f64,
}

/// Holds the geometry of the specimen (rectangular bar)
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamGeometry {
    /// Length along x
    pub length: f64,

    /// Height along y (cross-section per unit thickness)
    pub height: f64,

    /// Characteristic size of the cells/segments
    pub cell_size: f64,
}

/// Holds the loading of the specimen
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamLoading {
    /// Imposed displacement `ut · t` at the right end (traction test)
    Traction {
        /// Reference value of the imposed displacement
        ut: f64,
    },

    /// Clamped ends with a shrinking eigenstrain `ε₀(x) = -ΔT erfc(x / τ)` with `τ = t`
    ThermalShock {
        /// Temperature drop (scaled by the thermal expansion coefficient)
        delta_t: f64,
    },
}

impl ParamMaterial {
    /// Returns a sample with the values of the classical traction-test benchmark
    pub fn sample() -> Self {
        ParamMaterial {
            young: 10.0,
            poisson: 0.3,
            gc: 1.0,
            ell: 0.1,
            k_ell: 1e-6,
        }
    }
}

impl ParamGeometry {
    /// Returns a sample with the values of the classical traction-test benchmark
    pub fn sample() -> Self {
        ParamGeometry {
            length: 5.0,
            height: 1.0,
            cell_size: 0.02,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
