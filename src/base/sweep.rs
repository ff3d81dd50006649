use super::Config;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the lists of parameters of a parametric study (one run per combination)
///
/// The combinations are generated with the number of load steps in the outer loop, then
/// the cell size, and the regularization length in the inner loop. The regularization
/// length is given as a multiple of the cell size, e.g., `ℓ = 7 h` and `ℓ = 2 h`.
///
/// An empty list keeps the value of the base configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Sweep {
    /// Numbers of load steps
    pub n_load_steps: Vec<usize>,

    /// Cell (segment) sizes
    pub cell_sizes: Vec<f64>,

    /// Ratios ℓ / cell_size
    pub ell_factors: Vec<f64>,
}

impl Sweep {
    /// Allocates a new instance with empty lists (a single run with the base configuration)
    pub fn new() -> Self {
        Sweep::default()
    }

    /// Sets the numbers of load steps
    pub fn set_n_load_steps(&mut self, values: &[usize]) -> &mut Self {
        self.n_load_steps = values.to_vec();
        self
    }

    /// Sets the cell sizes
    pub fn set_cell_sizes(&mut self, values: &[f64]) -> &mut Self {
        self.cell_sizes = values.to_vec();
        self
    }

    /// Sets the ratios ℓ / cell_size
    pub fn set_ell_factors(&mut self, values: &[f64]) -> &mut Self {
        self.ell_factors = values.to_vec();
        self
    }

    /// Returns the number of runs
    pub fn n_runs(&self) -> usize {
        let n_steps = usize::max(self.n_load_steps.len(), 1);
        let n_sizes = usize::max(self.cell_sizes.len(), 1);
        let n_factors = usize::max(self.ell_factors.len(), 1);
        n_steps * n_sizes * n_factors
    }

    /// Generates the configurations of all runs
    ///
    /// Each configuration is validated. The run names must be unique because each run
    /// writes to its own directory; hence, when more than one number of load steps is given,
    /// use [Sweep::run_name] to name the runs.
    pub fn configs(&self, base: &Config) -> Result<Vec<Config>, StrError> {
        for factor in &self.ell_factors {
            if !(*factor > 0.0) || !factor.is_finite() {
                return Err("the ratios ℓ / cell_size must be finite and > 0");
            }
        }
        let steps = if self.n_load_steps.is_empty() {
            vec![base.n_load_steps]
        } else {
            self.n_load_steps.clone()
        };
        let sizes = if self.cell_sizes.is_empty() {
            vec![base.geometry.cell_size]
        } else {
            self.cell_sizes.clone()
        };
        let mut configs = Vec::with_capacity(self.n_runs());
        for n in &steps {
            for h in &sizes {
                let mut config = base.clone();
                config.set_load_steps(base.load_min, base.load_max, *n);
                config.geometry.cell_size = *h;
                if self.ell_factors.is_empty() {
                    configs.push(config);
                } else {
                    for factor in &self.ell_factors {
                        let mut c = config.clone();
                        c.material.ell = factor * h;
                        configs.push(c);
                    }
                }
            }
        }
        for config in &configs {
            if let Some(msg) = config.validate() {
                println!("ERROR: {}", msg);
                return Err("a configuration of the sweep failed validation");
            }
        }
        let mut names: Vec<String> = configs.iter().map(|c| self.run_name(c)).collect();
        names.sort();
        names.dedup();
        if names.len() != configs.len() {
            return Err("the sweep generates duplicate run names");
        }
        Ok(configs)
    }

    /// Returns the name of the run of a configuration generated by this sweep
    ///
    /// The number of load steps is appended only if the sweep varies it.
    ///
    /// Example: `AT1-bar-L5.0-H1.00-S0.0200-l0.1400-N100`
    pub fn run_name(&self, config: &Config) -> String {
        if self.n_load_steps.len() > 1 {
            format!("{}-N{}", config.run_name(), config.n_load_steps)
        } else {
            config.run_name()
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
