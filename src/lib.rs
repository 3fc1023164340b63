//! Waitline - wait-time estimation for bar and venue lines
//!
//! This crate aggregates crowd-sourced line reports into a single
//! minutes-and-category estimate per venue.

pub mod config;
pub mod error;
pub mod estimator;
pub mod snapshot;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EstimatorError, Result};
pub use types::*;

// Re-export key components
pub use estimator::{estimate, EstimatorConfig, WaitTimeEstimator, WeightedWaitTimeEstimator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
