//! Pfsim - Phase-field fracture simulator
//!
//! The simulation advances a quasi-static loading in steps. At each step, the coupled
//! displacement/damage problem is solved by alternate minimization: the elasticity problem
//! at fixed damage and the bound-constrained damage problem at fixed displacement are solved
//! in turn until the damage field stops changing. The damage field never decreases from one
//! load step to the next (irreversibility).
//!
//! The elasticity and damage solvers are provided by a [fem::Backend]. The
//! [analytical::SeriesBar] implements a lumped one-dimensional bar for reference runs.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod fem;
pub mod prelude;
