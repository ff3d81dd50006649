//! This module contains analytical solutions and reference backends for testing and verifications

mod homogeneous_bar;
mod series_bar;

pub use homogeneous_bar::*;
pub use series_bar::*;
