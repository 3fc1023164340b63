//! Line wait-time estimation
//!
//! This module turns user-submitted wait reports into a single current
//! estimate per venue using age decay, vote ratio and submitter reliability.

pub mod calculator;
pub mod category;
pub mod config;
pub mod venue;
pub mod weight;

// Re-export commonly used types
pub use calculator::{
    estimate, EstimateBreakdown, Exclusion, ExclusionReason, WaitTimeEstimator,
    WeightedWaitTimeEstimator,
};
pub use category::{category_for_minutes, default_minutes};
pub use config::EstimatorConfig;
pub use venue::{estimate_by_venue, reports_for_venue};
