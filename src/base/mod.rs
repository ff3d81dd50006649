//! Implements the base structures for a phase-field fracture simulation

mod config;
mod constants;
mod enums;
mod parameters;
mod sweep;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::sweep::*;
