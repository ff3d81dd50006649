use super::{Backend, ControlAlternate, Fields, SolveReport};
use crate::base::{Config, Policy};
use crate::StrError;
use russell_lab::vec_copy;

/// Defines the final state of the alternate minimization at one load step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// The damage increment is within the tolerance
    Converged,

    /// The maximum number of iterations was reached
    Capped,
}

/// Holds the results of the alternate minimization at one load step
#[derive(Clone, Copy, Debug)]
pub struct StepReport {
    /// Number of iterations (elasticity + damage solves)
    pub iterations: usize,

    /// Final infinity norm of the damage increment
    pub err_alpha: f64,

    /// Final state
    pub outcome: StepOutcome,

    /// Number of non-converged backend solves accepted by the policy
    pub backend_failures: usize,
}

/// Implements the alternate minimization (staggered) algorithm
///
/// For a fixed load, finds (u, α) that are stationary for the total energy by
/// block-coordinate descent:
///
/// ```text
/// iter = 0, err = ∞
/// while err > tol and iter < n_max_iterations:
///     iter += 1
///     solve the elasticity problem for u with α fixed
///     solve the damage problem for α with u fixed and lb ≤ α ≤ ub
///     err = ‖α - α_old‖∞
///     α_old ← α
/// ```
///
/// The elasticity problem is always solved before the damage problem (Gauss-Seidel order).
pub struct AlternateMinimization<'a> {
    /// Holds the configuration
    config: &'a Config,

    /// Holds the convergence control
    pub control: ControlAlternate<'a>,
}

impl<'a> AlternateMinimization<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config, ndof_alpha: usize) -> Self {
        AlternateMinimization {
            config,
            control: ControlAlternate::new(config, ndof_alpha),
        }
    }

    /// Solves the coupled problem at the load multiplier t
    ///
    /// On input, `fields` holds the solution of the previous load step (warm start) and
    /// `fields.lb` holds the damage accepted at the previous load step.
    ///
    /// **Note:** The lower bound is not updated here; see [Fields::update_lower_bound].
    pub fn solve<B>(&mut self, backend: &mut B, fields: &mut Fields, t: f64) -> Result<StepReport, StrError>
    where
        B: Backend + ?Sized,
    {
        backend.update_load(t)?;
        self.control.reset();
        let mut backend_failures = 0;
        while self.control.keep_iterating() {
            self.control.start_iteration();

            // elasticity
            let report = backend.solve_elasticity(&mut fields.u, &fields.alpha)?;
            backend_failures += self.check_backend(&report, "elasticity")?;

            // damage
            let report = backend.solve_damage(&mut fields.alpha, &fields.u, &fields.lb, &fields.ub)?;
            backend_failures += self.check_backend(&report, "damage")?;

            // error
            self.control.analyze_alpha(&fields.alpha, &fields.alpha_old)?;
            vec_copy(&mut fields.alpha_old, &fields.alpha)?;
            self.control.print_iteration();
        }

        let outcome = if self.control.converged() {
            StepOutcome::Converged
        } else {
            StepOutcome::Capped
        };
        if outcome == StepOutcome::Capped {
            match self.config.on_capped {
                Policy::Ignore => (),
                Policy::Warn => println!(
                    "WARNING: alternate minimization reached {} iterations at t = {:?} with ‖Δα‖∞ = {:e}",
                    self.control.iteration(),
                    t,
                    self.control.err_alpha()
                ),
                Policy::Abort => return Err("alternate minimization did not converge"),
            }
        }
        Ok(StepReport {
            iterations: self.control.iteration(),
            err_alpha: self.control.err_alpha(),
            outcome,
            backend_failures,
        })
    }

    /// Applies the backend-failure policy and returns the number of failures to be recorded
    fn check_backend(&self, report: &SolveReport, problem: &str) -> Result<usize, StrError> {
        if report.converged {
            return Ok(0);
        }
        match self.config.on_backend_failure {
            Policy::Ignore => Ok(1),
            Policy::Warn => {
                println!(
                    "WARNING: the {} solver did not converge after {} iterations (residual = {:e})",
                    problem, report.iterations, report.residual
                );
                Ok(1)
            }
            Policy::Abort => {
                if problem == "elasticity" {
                    Err("the elasticity solver did not converge")
                } else {
                    Err("the damage solver did not converge")
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
