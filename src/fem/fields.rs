use super::Backend;
use crate::StrError;
use russell_lab::{vec_copy, Vector};
use serde::{Deserialize, Serialize};

/// Holds the primary fields of a phase-field fracture simulation
///
/// The fields are allocated once, before the load stepping begins, and mutated in place
/// afterwards. The backend only borrows them during each subproblem solve.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Fields {
    /// Displacement field u
    ///
    /// (ndof_u)
    pub u: Vector,

    /// Damage field α
    ///
    /// (ndof_alpha)
    pub alpha: Vector,

    /// Damage field at the previous alternate minimization iteration
    ///
    /// (ndof_alpha)
    pub alpha_old: Vector,

    /// Lower bound of the damage field (damage accepted at the previous load step)
    ///
    /// (ndof_alpha)
    pub lb: Vector,

    /// Upper bound of the damage field
    ///
    /// (ndof_alpha)
    pub ub: Vector,
}

impl Fields {
    /// Allocates a new instance with the dimensions and initial damage given by the backend
    pub fn new(backend: &dyn Backend) -> Result<Self, StrError> {
        let ndof_u = backend.ndof_u();
        let ndof_alpha = backend.ndof_alpha();
        if ndof_u == 0 {
            return Err("the number of displacement DOFs must be > 0");
        }
        if ndof_alpha == 0 {
            return Err("the number of damage DOFs must be > 0");
        }
        let mut alpha = Vector::new(ndof_alpha);
        backend.initial_damage(&mut alpha)?;
        if alpha.dim() != ndof_alpha {
            return Err("the initial damage field has an incorrect dimension");
        }
        for i in 0..ndof_alpha {
            if !(alpha[i] >= 0.0 && alpha[i] <= 1.0) {
                return Err("the initial damage must be within [0, 1]");
            }
        }
        let mut alpha_old = Vector::new(ndof_alpha);
        let mut lb = Vector::new(ndof_alpha);
        vec_copy(&mut alpha_old, &alpha)?;
        vec_copy(&mut lb, &alpha)?;
        Ok(Fields {
            u: Vector::new(ndof_u),
            alpha,
            alpha_old,
            lb,
            ub: Vector::filled(ndof_alpha, 1.0),
        })
    }

    /// Updates the lower bound with the accepted damage field (irreversibility)
    pub fn update_lower_bound(&mut self) -> Result<(), StrError> {
        vec_copy(&mut self.lb, &self.alpha)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
