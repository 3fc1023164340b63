//! Estimator constants and tunable configuration
//!
//! The canonical values below are the single source of truth for recency,
//! decay and vote weighting. `EstimatorConfig::default()` mirrors them.

use crate::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reports older than this are dropped before weighting (2 hours)
pub const MAX_REPORT_AGE_SECONDS: u64 = 2 * 60 * 60;

/// Per-hour multiplicative decay applied to a report's weight
pub const DECAY_BASE: f64 = 0.8;

/// How far a unanimous vote ratio can move a report's weight (±half of this)
pub const VOTE_IMPACT_FACTOR: f64 = 0.2;

/// Vote ratio assumed for reports nobody has voted on
pub const NEUTRAL_VOTE_RATIO: f64 = 0.5;

/// Reliability multiplier for submitters with no recorded trust level
pub const DEFAULT_RELIABILITY: f64 = 1.0;

/// Configuration for wait-time estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Maximum report age in seconds; older reports are excluded
    pub max_report_age_seconds: u64,
    /// Hourly decay base, strictly between 0 and 1
    pub decay_base: f64,
    /// Vote adjustment strength
    pub vote_impact_factor: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_report_age_seconds: MAX_REPORT_AGE_SECONDS,
            decay_base: DECAY_BASE,
            vote_impact_factor: VOTE_IMPACT_FACTOR,
        }
    }
}

impl EstimatorConfig {
    /// Wider window with steeper decay: 4 hours and `e^-0.5` per hour
    pub fn long_window() -> Self {
        Self {
            max_report_age_seconds: 4 * 60 * 60,
            decay_base: (-0.5f64).exp(),
            vote_impact_factor: VOTE_IMPACT_FACTOR,
        }
    }

    /// Recency window as a Duration
    pub fn max_report_age(&self) -> Duration {
        Duration::from_secs(self.max_report_age_seconds)
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_report_age_seconds == 0 {
            return Err(EstimatorError::ConfigurationError {
                message: "max_report_age_seconds must be greater than 0".to_string(),
            }
            .into());
        }

        if !(self.decay_base > 0.0 && self.decay_base < 1.0) {
            return Err(EstimatorError::ConfigurationError {
                message: format!(
                    "decay_base must be strictly between 0 and 1, got {}",
                    self.decay_base
                ),
            }
            .into());
        }

        // At 2.0 a fully downvoted report would reach zero weight
        if !(self.vote_impact_factor >= 0.0 && self.vote_impact_factor < 2.0) {
            return Err(EstimatorError::ConfigurationError {
                message: format!(
                    "vote_impact_factor must be in [0, 2), got {}",
                    self.vote_impact_factor
                ),
            }
            .into());
        }

        Ok(())
    }
}
