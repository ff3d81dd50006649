//! Makes available common structures needed to run a simulation
//!
//! You may write `use pfsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::{HomogeneousBar, SeriesBar};
pub use crate::base::{Config, DamageLaw, ParamGeometry, ParamLoading, ParamMaterial, Policy, Sweep};
pub use crate::base::{DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::fem::{Backend, FileIo, Simulation, SolveReport, SummaryPlot};
