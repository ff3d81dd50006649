use crate::base::Config;
use crate::StrError;
use russell_lab::{vec_add, vec_norm, Norm, Vector};

/// Controls the convergence of the alternate minimization iterations
///
/// The convergence criterion is the infinity norm (max absolute component) of the
/// damage increment between two successive iterations:
///
/// ```text
/// err = ‖α - α_old‖∞ ≤ tol
/// ```
pub struct ControlAlternate<'a> {
    /// Holds the configuration
    config: &'a Config,

    /// Holds the damage increment α - α_old
    alpha_error: Vector,

    /// Holds the current iteration count (number of elasticity + damage solves)
    iteration: usize,

    /// Holds the current infinity norm of the damage increment
    err_alpha: f64,

    /// Holds the maximum damage value of the current iterate
    alpha_max: f64,
}

impl<'a> ControlAlternate<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config, ndof_alpha: usize) -> Self {
        ControlAlternate {
            config,
            alpha_error: Vector::new(ndof_alpha),
            iteration: 0,
            err_alpha: f64::INFINITY,
            alpha_max: 0.0,
        }
    }

    /// Resets the iteration counter and the error at the beginning of a load step
    pub fn reset(&mut self) {
        self.iteration = 0;
        self.err_alpha = f64::INFINITY;
    }

    /// Returns the current iteration count
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the current infinity norm of the damage increment
    pub fn err_alpha(&self) -> f64 {
        self.err_alpha
    }

    /// Indicates whether another iteration must be performed
    pub fn keep_iterating(&self) -> bool {
        self.err_alpha > self.config.tol && self.iteration < self.config.n_max_iterations
    }

    /// Indicates whether the damage increment is within the tolerance
    pub fn converged(&self) -> bool {
        self.err_alpha <= self.config.tol
    }

    /// Records the start of a new iteration
    pub(crate) fn start_iteration(&mut self) {
        self.iteration += 1;
    }

    /// Analyzes the damage increment
    ///
    /// Returns an error if NaN or Inf are found in the increment.
    pub(crate) fn analyze_alpha(&mut self, alpha: &Vector, alpha_old: &Vector) -> Result<(), StrError> {
        vec_add(&mut self.alpha_error, 1.0, alpha, -1.0, alpha_old)?;
        if self.alpha_error.as_data().iter().any(|v| !v.is_finite()) {
            self.err_alpha = f64::NAN;
            return Err("found NaN or Inf in the damage increment");
        }
        self.err_alpha = vec_norm(&self.alpha_error, Norm::Max);
        self.alpha_max = alpha.as_data().iter().fold(f64::NEG_INFINITY, |acc, &a| f64::max(acc, a));
        Ok(())
    }

    /// Prints the header of the table with load step and iteration data
    pub fn print_header(&self) {
        if self.config.verbose_steps || self.config.verbose_iterations {
            println!("\nPFSIM === LOAD STEPPING AND ALTERNATE MINIMIZATION ===========================");
            println!("\nLegend:");
            println!("✅ : converged");
            println!("👍 : converging");
            println!("🛑 : reached the maximum number of iterations\n");
            println!("{}", "─".repeat(79));
            println!(
                "{:>6} {:>13} {:>5} {:>10} {:>10} {:>13} {:>13}",
                "step", "t", "iter", "‖Δα‖∞", "max(α)", "elastic", "surface"
            );
            println!("{}", "─".repeat(79));
        }
    }

    /// Prints the iteration data
    pub(crate) fn print_iteration(&self) {
        if self.config.verbose_iterations {
            let icon = if self.converged() {
                "✅"
            } else if self.iteration >= self.config.n_max_iterations {
                "🛑"
            } else {
                "👍"
            };
            println!(
                "{:>6} {:>13} {:>5} {:>10.2e} {:>10.6} {}",
                ".", ".", self.iteration, self.err_alpha, self.alpha_max, icon
            );
        }
    }

    /// Prints the load step data (after the alternate minimization)
    pub(crate) fn print_step(&self, step: usize, t: f64, elastic: f64, surface: f64) {
        if self.config.verbose_steps {
            let icon = if self.converged() { "✅" } else { "🛑" };
            println!(
                "{:>6} {:>13.6e} {:>5} {:>10.2e} {:>10.6} {:>13.6e} {:>13.6e} {}",
                step, t, self.iteration, self.err_alpha, self.alpha_max, elastic, surface, icon
            );
        }
    }

    /// Prints the horizontal line at the end of the analysis
    pub(crate) fn print_footer(&self) {
        if self.config.verbose_steps || self.config.verbose_iterations {
            println!("{}", "─".repeat(79));
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
