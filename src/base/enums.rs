use russell_lab::math::SQRT_2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the regularized damage law (phase-field model)
///
/// The dissipated energy density reads:
///
/// ```text
///       Gc  ⎛ w(α)    ℓ          ⎞
/// d = ———— ⎜ ———— + ——— ∇α · ∇α ⎟
///      c_w  ⎝  ℓ      2          ⎠
/// ```
///
/// and the stiffness is degraded by `a(α) = (1 - α)²`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum DamageLaw {
    /// Linear local dissipation `w(α) = α` (has an elastic phase)
    AT1,

    /// Quadratic local dissipation `w(α) = α²` (damages from the onset of loading)
    AT2,
}

impl DamageLaw {
    /// Returns the local dissipation function w(α)
    pub fn w(&self, alpha: f64) -> f64 {
        match self {
            DamageLaw::AT1 => alpha,
            DamageLaw::AT2 => alpha * alpha,
        }
    }

    /// Returns the derivative dw/dα
    pub fn dw(&self, alpha: f64) -> f64 {
        match self {
            DamageLaw::AT1 => 1.0,
            DamageLaw::AT2 => 2.0 * alpha,
        }
    }

    /// Returns the stiffness degradation function a(α) = (1 - α)²
    pub fn a(&self, alpha: f64) -> f64 {
        (1.0 - alpha) * (1.0 - alpha)
    }

    /// Returns the derivative da/dα
    pub fn da(&self, alpha: f64) -> f64 {
        -2.0 * (1.0 - alpha)
    }

    /// Returns the normalization constant c_w = 2 √2 ∫₀¹ √w(s) ds
    ///
    /// With this constant, the dissipated energy of a fully developed crack
    /// approaches Gc times the crack length as ℓ → 0.
    pub fn c_w(&self) -> f64 {
        match self {
            DamageLaw::AT1 => 4.0 * SQRT_2 / 3.0,
            DamageLaw::AT2 => SQRT_2,
        }
    }

    /// Minimizes the local energy density within the box [lb, ub]
    ///
    /// The local energy density is
    ///
    /// ```text
    /// f(α) = ½ (a(α) + k) s + c w(α)
    /// ```
    ///
    /// where `s = E ε²` is (twice) the undamaged elastic energy density and `c = Gc / (c_w ℓ)`.
    /// Since `f` is convex in α for both laws, the constrained minimizer is the projection
    /// of the unconstrained one onto the box.
    pub fn local_minimizer(&self, s: f64, c: f64, lb: f64, ub: f64) -> f64 {
        let unconstrained = match self {
            DamageLaw::AT1 => {
                if s > 0.0 {
                    1.0 - c / s
                } else {
                    f64::NEG_INFINITY
                }
            }
            DamageLaw::AT2 => {
                if s + 2.0 * c > 0.0 {
                    s / (s + 2.0 * c)
                } else {
                    0.0
                }
            }
        };
        f64::min(f64::max(unconstrained, lb), ub)
    }
}

impl fmt::Display for DamageLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageLaw::AT1 => write!(f, "AT1"),
            DamageLaw::AT2 => write!(f, "AT2"),
        }
    }
}

/// Defines what to do with a failure that does not invalidate the fields
///
/// Two situations are governed by this option: (1) the alternate minimization reaches
/// the maximum number of iterations without converging, and (2) a backend solver
/// reports that it did not converge (soft failure).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Policy {
    /// Accepts the fields silently (the diagnostics still record the event)
    Ignore,

    /// Accepts the fields and prints a warning
    Warn,

    /// Stops the simulation with an error
    Abort,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
