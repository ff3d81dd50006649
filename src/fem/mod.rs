//! Implements the alternate minimization solver and the load stepping

mod alternate_minimization;
mod backend;
mod control_alternate;
mod diagnostics;
mod fields;
mod file_io;
mod simulation;
mod summary_plot;
pub use crate::fem::alternate_minimization::*;
pub use crate::fem::backend::*;
pub use crate::fem::control_alternate::*;
pub use crate::fem::diagnostics::*;
pub use crate::fem::fields::*;
pub use crate::fem::file_io::*;
pub use crate::fem::simulation::*;
pub use crate::fem::summary_plot::*;

#[cfg(test)]
pub(crate) mod testing;
