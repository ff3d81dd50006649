use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the quantities recorded at the end of each load step
///
/// The arrays are allocated with the number of load steps and filled incrementally;
/// `n_recorded` tells how many rows hold data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Diagnostics {
    /// Number of recorded load steps
    pub n_recorded: usize,

    /// Energies: [t, elastic, surface, total]
    ///
    /// (n_load_steps)
    pub energies: Vec<[f64; 4]>,

    /// Forces: [t, axial force resultant]
    ///
    /// (n_load_steps)
    pub forces: Vec<[f64; 2]>,

    /// Iterations: [t, number of alternate minimization iterations]
    ///
    /// (n_load_steps)
    pub iterations: Vec<[f64; 2]>,

    /// Indicates whether the alternate minimization converged (false means capped)
    ///
    /// (n_load_steps)
    pub converged: Vec<bool>,

    /// Number of non-converged backend solves accepted during the load step
    ///
    /// (n_load_steps)
    pub backend_failures: Vec<usize>,
}

/// Holds the data of one load step to be recorded
#[derive(Clone, Copy, Debug)]
pub struct StepRecord {
    /// Load multiplier
    pub t: f64,

    /// Elastic energy
    pub elastic: f64,

    /// Surface (dissipated) energy
    pub surface: f64,

    /// Axial force resultant
    pub force: f64,

    /// Number of alternate minimization iterations
    pub iterations: usize,

    /// Convergence flag of the alternate minimization
    pub converged: bool,

    /// Number of accepted non-converged backend solves
    pub backend_failures: usize,
}

impl Diagnostics {
    /// Allocates a new instance
    pub fn new(n_load_steps: usize) -> Self {
        Diagnostics {
            n_recorded: 0,
            energies: vec![[0.0; 4]; n_load_steps],
            forces: vec![[0.0; 2]; n_load_steps],
            iterations: vec![[0.0; 2]; n_load_steps],
            converged: vec![false; n_load_steps],
            backend_failures: vec![0; n_load_steps],
        }
    }

    /// Returns the capacity (number of load steps)
    pub fn capacity(&self) -> usize {
        self.energies.len()
    }

    /// Records the data of the next load step
    pub fn record(&mut self, data: &StepRecord) -> Result<(), StrError> {
        let i = self.n_recorded;
        if i >= self.capacity() {
            return Err("cannot record more load steps than allocated");
        }
        self.energies[i] = [data.t, data.elastic, data.surface, data.elastic + data.surface];
        self.forces[i] = [data.t, data.force];
        self.iterations[i] = [data.t, data.iterations as f64];
        self.converged[i] = data.converged;
        self.backend_failures[i] = data.backend_failures;
        self.n_recorded += 1;
        Ok(())
    }

    /// Returns the recorded load multipliers
    pub fn loads(&self) -> Vec<f64> {
        self.energies[..self.n_recorded].iter().map(|row| row[0]).collect()
    }

    /// Returns the recorded column `j` of the energies table
    ///
    /// `j = 1` elastic, `j = 2` surface, `j = 3` total
    pub fn energy_column(&self, j: usize) -> Vec<f64> {
        self.energies[..self.n_recorded].iter().map(|row| row[j]).collect()
    }

    /// Returns the recorded force resultants
    pub fn force_column(&self) -> Vec<f64> {
        self.forces[..self.n_recorded].iter().map(|row| row[1]).collect()
    }

    /// Returns the indices of the load steps whose alternate minimization did not converge
    pub fn capped_steps(&self) -> Vec<usize> {
        (0..self.n_recorded).filter(|&i| !self.converged[i]).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
