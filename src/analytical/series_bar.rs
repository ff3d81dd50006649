use crate::base::{Config, DamageLaw, ParamLoading};
use crate::fem::{Backend, SolveReport};
use crate::StrError;
use russell_lab::math::erfc;
use russell_lab::Vector;

/// Implements a lumped one-dimensional bar made of segments in series
///
/// The bar of length L is divided into n segments of length h = L / n. Each segment i
/// carries one damage value αᵢ and a uniform (mechanical) strain; the n + 1 nodal
/// displacements form the displacement field. The left end is fixed and the right end
/// has an imposed displacement U.
///
/// The elasticity problem has the closed-form solution (equilibrium: uniform force F)
///
/// ```text
///      U - Σ h ε₀ᵢ                          h
/// F = —————————————    with    Cᵢ = ——————————————————
///         Σ Cᵢ                       (a(αᵢ) + k_ℓ) Eᵢ H
/// ```
///
/// where ε₀ᵢ is the eigenstrain of segment i. The damage problem is local (the gradient term
/// is dropped); hence, each αᵢ is the projection of the minimizer of the local energy
/// density onto [lbᵢ, ubᵢ]. See [DamageLaw::local_minimizer].
///
/// Two loadings are available:
///
/// * Traction -- U = ut · t without eigenstrain
/// * Thermal shock -- U = 0 (clamped ends) with ε₀(x) = -ΔT erfc(x / t)
pub struct SeriesBar {
    law: DamageLaw,
    loading: ParamLoading,
    gc: f64,
    ell: f64,
    k_ell: f64,
    height: f64,
    h: f64,
    young: Vec<f64>,
    x_mid: Vec<f64>,
    eigenstrain: Vec<f64>,
    imposed: f64,
}

impl SeriesBar {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `config` -- the configuration (material, geometry, loading)
    /// * `n_segment` -- the number of segments; None means `round(length / cell_size)`
    pub fn new(config: &Config, n_segment: Option<usize>) -> Result<Self, StrError> {
        if config.validate().is_some() {
            return Err("cannot allocate SeriesBar because config.validate() failed");
        }
        let length = config.geometry.length;
        let n = match n_segment {
            Some(n) => n,
            None => f64::round(length / config.geometry.cell_size) as usize,
        };
        if n < 1 {
            return Err("the number of segments must be ≥ 1");
        }
        let h = length / (n as f64);
        let x_mid = (0..n).map(|i| (i as f64 + 0.5) * h).collect();
        let m = &config.material;
        Ok(SeriesBar {
            law: config.law,
            loading: config.loading,
            gc: m.gc,
            ell: m.ell,
            k_ell: m.k_ell,
            height: config.geometry.height,
            h,
            young: vec![m.young; n],
            x_mid,
            eigenstrain: vec![0.0; n],
            imposed: 0.0,
        })
    }

    /// Reduces the Young's modulus of one segment to trigger the localization of damage
    ///
    /// * `index` -- the index of the segment
    /// * `factor` -- the reduction factor with `0 < factor ≤ 1`
    pub fn set_weak_segment(&mut self, index: usize, factor: f64) -> Result<&mut Self, StrError> {
        if index >= self.young.len() {
            return Err("the index of the weak segment is out of bounds");
        }
        if factor <= 0.0 || factor > 1.0 {
            return Err("the reduction factor must satisfy 0 < factor ≤ 1");
        }
        self.young[index] *= factor;
        Ok(self)
    }

    /// Returns the number of segments
    pub fn n_segment(&self) -> usize {
        self.young.len()
    }

    /// Returns the length of the segments
    pub fn segment_length(&self) -> f64 {
        self.h
    }

    /// Returns the currently imposed end displacement
    pub fn imposed_displacement(&self) -> f64 {
        self.imposed
    }

    /// Returns the eigenstrains of the segments
    pub fn eigenstrain(&self) -> &Vec<f64> {
        &self.eigenstrain
    }

    /// Returns the mechanical strain of segment i (total strain minus eigenstrain)
    pub fn mechanical_strain(&self, u: &Vector, i: usize) -> f64 {
        (u[i + 1] - u[i]) / self.h - self.eigenstrain[i]
    }

    /// Returns the axial stiffness (a(α) + k_ℓ) E H of segment i
    fn stiffness(&self, alpha: &Vector, i: usize) -> f64 {
        (self.law.a(alpha[i]) + self.k_ell) * self.young[i] * self.height
    }
}

impl Backend for SeriesBar {
    fn ndof_u(&self) -> usize {
        self.young.len() + 1
    }

    fn ndof_alpha(&self) -> usize {
        self.young.len()
    }

    fn update_load(&mut self, t: f64) -> Result<(), StrError> {
        match self.loading {
            ParamLoading::Traction { ut } => {
                self.imposed = ut * t;
                self.eigenstrain.fill(0.0);
            }
            ParamLoading::ThermalShock { delta_t } => {
                self.imposed = 0.0;
                for i in 0..self.eigenstrain.len() {
                    self.eigenstrain[i] = if t > 0.0 {
                        -delta_t * erfc(self.x_mid[i] / t)
                    } else {
                        0.0
                    };
                }
            }
        }
        Ok(())
    }

    fn solve_elasticity(&mut self, u: &mut Vector, alpha: &Vector) -> Result<SolveReport, StrError> {
        let n = self.young.len();
        let mut compliance = 0.0;
        let mut free_elongation = 0.0;
        for i in 0..n {
            let k = self.stiffness(alpha, i);
            if k <= 0.0 {
                return Err("a fully damaged segment without residual stiffness makes the bar singular");
            }
            compliance += self.h / k;
            free_elongation += self.h * self.eigenstrain[i];
        }
        let force = (self.imposed - free_elongation) / compliance;
        u[0] = 0.0;
        for i in 0..n {
            u[i + 1] = u[i] + force * self.h / self.stiffness(alpha, i) + self.h * self.eigenstrain[i];
        }
        Ok(SolveReport::direct())
    }

    fn solve_damage(
        &mut self,
        alpha: &mut Vector,
        u: &Vector,
        lb: &Vector,
        ub: &Vector,
    ) -> Result<SolveReport, StrError> {
        let c = self.gc / (self.law.c_w() * self.ell);
        for i in 0..self.young.len() {
            let eps = self.mechanical_strain(u, i);
            alpha[i] = self.law.local_minimizer(self.young[i] * eps * eps, c, lb[i], ub[i]);
        }
        Ok(SolveReport::direct())
    }

    fn elastic_energy(&self, u: &Vector, alpha: &Vector) -> f64 {
        let mut energy = 0.0;
        for i in 0..self.young.len() {
            let eps = self.mechanical_strain(u, i);
            energy += 0.5 * self.stiffness(alpha, i) * eps * eps * self.h;
        }
        energy
    }

    fn surface_energy(&self, alpha: &Vector) -> f64 {
        let coefficient = self.gc / self.law.c_w() * self.height * self.h / self.ell;
        let mut energy = 0.0;
        for i in 0..self.young.len() {
            energy += coefficient * self.law.w(alpha[i]);
        }
        energy
    }

    fn reaction_force(&self, u: &Vector, alpha: &Vector) -> f64 {
        self.stiffness(alpha, 0) * self.mechanical_strain(u, 0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
