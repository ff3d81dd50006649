use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the outcome of a backend solve
///
/// A backend reports a *soft* failure (e.g., a nonlinear solver reaching its maximum
/// number of iterations) by returning `converged = false`; the caller decides what to do
/// according to [crate::base::Policy]. *Hard* failures are reported with `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SolveReport {
    /// Indicates that the solver reached its tolerance
    pub converged: bool,

    /// Number of iterations performed by the solver (1 for direct solvers)
    pub iterations: usize,

    /// Final residual norm (0.0 for direct or closed-form solvers)
    pub residual: f64,
}

impl SolveReport {
    /// Returns a report for a direct (or closed-form) solve
    pub fn direct() -> Self {
        SolveReport {
            converged: true,
            iterations: 1,
            residual: 0.0,
        }
    }

    /// Returns a report for a non-converged solve
    pub fn not_converged(iterations: usize, residual: f64) -> Self {
        SolveReport {
            converged: false,
            iterations,
            residual,
        }
    }
}

/// Defines the numerical backend solving the elasticity and damage subproblems
///
/// The backend owns the discretization (function spaces, weak forms, boundary conditions,
/// solvers). The fields are owned by the caller and lent to the backend only for the
/// duration of each call.
pub trait Backend {
    /// Returns the number of degrees of freedom of the displacement field
    fn ndof_u(&self) -> usize;

    /// Returns the number of degrees of freedom of the damage field
    fn ndof_alpha(&self) -> usize;

    /// Sets the initial (pre-existing) damage field
    ///
    /// The default implementation leaves the (zero) damage untouched.
    fn initial_damage(&self, _alpha: &mut Vector) -> Result<(), StrError> {
        Ok(())
    }

    /// Updates the time-dependent boundary data (imposed displacement, eigenstrain) for the load multiplier t
    fn update_load(&mut self, t: f64) -> Result<(), StrError>;

    /// Solves the elasticity subproblem for u with a fixed damage field
    ///
    /// On input, `u` holds the previous solution (initial guess).
    fn solve_elasticity(&mut self, u: &mut Vector, alpha: &Vector) -> Result<SolveReport, StrError>;

    /// Solves the damage subproblem for alpha with a fixed displacement field and lb ≤ alpha ≤ ub
    ///
    /// On input, `alpha` holds the previous solution (initial guess).
    fn solve_damage(&mut self, alpha: &mut Vector, u: &Vector, lb: &Vector, ub: &Vector)
        -> Result<SolveReport, StrError>;

    /// Calculates the elastic energy
    fn elastic_energy(&self, u: &Vector, alpha: &Vector) -> f64;

    /// Calculates the surface (dissipated) energy
    fn surface_energy(&self, alpha: &Vector) -> f64;

    /// Calculates the axial force resultant on the loaded boundary
    fn reaction_force(&self, u: &Vector, alpha: &Vector) -> f64;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolveReport;

    #[test]
    fn solve_report_works() {
        let report = SolveReport::direct();
        assert_eq!(report.converged, true);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.residual, 0.0);
        let report = SolveReport::not_converged(50, 1e-3);
        let clone = report.clone();
        assert_eq!(
            format!("{:?}", clone),
            "SolveReport { converged: false, iterations: 50, residual: 0.001 }"
        );
    }
}
