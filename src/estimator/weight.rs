//! Per-report weighting: age decay, vote adjustment and submitter reliability

use crate::estimator::calculator::ExclusionReason;
use crate::estimator::category::default_minutes;
use crate::estimator::config::{EstimatorConfig, DEFAULT_RELIABILITY, NEUTRAL_VOTE_RATIO};
use crate::types::{LineReading, Report};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Age of a report in fractional hours; future timestamps count as age zero
pub fn age_hours(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(timestamp).num_milliseconds();
    (millis as f64 / MILLIS_PER_HOUR).max(0.0)
}

/// Exponential decay weight for a report of the given age
pub fn time_weight(age_hours: f64, decay_base: f64) -> f64 {
    decay_base.powf(age_hours.max(0.0))
}

/// Fraction of votes that are upvotes, or the neutral prior with no votes
pub fn vote_ratio(upvotes: u32, downvotes: u32) -> f64 {
    let total = u64::from(upvotes) + u64::from(downvotes);
    if total == 0 {
        return NEUTRAL_VOTE_RATIO;
    }
    f64::from(upvotes) / total as f64
}

/// Weight multiplier in `[1 - factor/2, 1 + factor/2]`
pub fn vote_weight(vote_ratio: f64, vote_impact_factor: f64) -> f64 {
    1.0 + (vote_ratio - NEUTRAL_VOTE_RATIO) * vote_impact_factor
}

/// Submitter reliability, or `None` when the supplied value is unusable
pub fn reliability(report: &Report) -> Option<f64> {
    match report.submitter_reliability {
        None => Some(DEFAULT_RELIABILITY),
        Some(value) if value.is_finite() && value >= 0.0 => Some(value),
        Some(_) => None,
    }
}

/// Minutes a reading contributes to the average, or why it cannot contribute
pub fn effective_minutes(reading: &LineReading) -> Result<f64, ExclusionReason> {
    match reading {
        LineReading::Minutes { minutes, .. } if *minutes >= 0 => Ok(f64::from(*minutes)),
        LineReading::Minutes { .. } => Err(ExclusionReason::NegativeMinutes),
        LineReading::Category { category } => Ok(f64::from(default_minutes(*category))),
        LineReading::Malformed { .. } => Err(ExclusionReason::MalformedReading),
    }
}

/// Breakdown of how a report's weight was derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportWeight {
    pub age_hours: f64,
    pub time_weight: f64,
    pub vote_weight: f64,
    pub reliability: f64,
    /// Absolute weight; may be infinite for extreme reliabilities
    pub total: f64,
}

impl ReportWeight {
    /// Combine the individual factors for one report
    pub fn compute(
        report: &Report,
        reliability: f64,
        now: DateTime<Utc>,
        config: &EstimatorConfig,
    ) -> Self {
        let age_hours = age_hours(report.timestamp, now);
        let time_weight = time_weight(age_hours, config.decay_base);
        let vote_weight = vote_weight(
            vote_ratio(report.upvotes, report.downvotes),
            config.vote_impact_factor,
        );

        Self {
            age_hours,
            time_weight,
            vote_weight,
            reliability,
            total: reliability * time_weight * vote_weight,
        }
    }

    /// Weight with reliability divided by the largest reliability in the
    /// aggregate. Stays within `[0, 1 + vote_impact_factor / 2]`, so sums
    /// over many reports cannot overflow.
    pub fn relative_to(&self, max_reliability: f64) -> f64 {
        if max_reliability <= 0.0 {
            return 0.0;
        }
        (self.reliability / max_reliability) * self.time_weight * self.vote_weight
    }
}
