//! Weighted wait-time estimation
//!
//! Turns a snapshot of reports for one venue into a single estimate:
//! expired and malformed reports are dropped, the rest are averaged with
//! weights from age decay, vote ratio and submitter reliability.

use crate::estimator::category::category_for_minutes;
use crate::estimator::config::EstimatorConfig;
use crate::estimator::weight::{effective_minutes, reliability, ReportWeight};
use crate::types::{EstimateResult, Report, ReportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Why a report did not take part in an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Older than the recency window
    Expired,
    /// Carried a negative minute count
    NegativeMinutes,
    /// Minutes were not an integer, or no usable reading was present
    MalformedReading,
    /// Submitter reliability was negative or not a finite number
    InvalidReliability,
}

/// A report left out of the aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub report_id: ReportId,
    pub reason: ExclusionReason,
}

/// A report that took part in the aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub report_id: ReportId,
    pub effective_minutes: f64,
    pub weight: ReportWeight,
}

/// Estimate together with the per-report detail that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub result: EstimateResult,
    /// Unrounded weighted average, `None` when the total weight was zero
    pub weighted_minutes: Option<f64>,
    /// Sum of weights relative to the most reliable contributor
    pub total_weight: f64,
    pub contributions: Vec<Contribution>,
    pub exclusions: Vec<Exclusion>,
}

impl EstimateBreakdown {
    /// Number of reports that were excluded for the given reason
    pub fn excluded_count(&self, reason: ExclusionReason) -> usize {
        self.exclusions
            .iter()
            .filter(|exclusion| exclusion.reason == reason)
            .count()
    }
}

/// Trait for turning venue reports into a wait estimate
pub trait WaitTimeEstimator: Send + Sync {
    /// Estimate the current wait from a snapshot of one venue's reports
    fn estimate(&self, reports: &[Report], now: DateTime<Utc>) -> EstimateResult {
        self.estimate_detailed(reports, now).result
    }

    /// Estimate and report which reports contributed or were excluded
    fn estimate_detailed(&self, reports: &[Report], now: DateTime<Utc>) -> EstimateBreakdown;

    /// Get the current configuration
    fn config(&self) -> &EstimatorConfig;

    /// Update the configuration
    fn update_config(&mut self, config: EstimatorConfig) -> crate::error::Result<()>;
}

/// Estimator using decay, vote and reliability weighting
#[derive(Debug, Clone, Default)]
pub struct WeightedWaitTimeEstimator {
    config: EstimatorConfig,
}

impl WeightedWaitTimeEstimator {
    /// Create a new estimator with a validated configuration
    pub fn new(config: EstimatorConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decide whether a report is usable, returning its minutes and reliability
    fn classify(
        &self,
        report: &Report,
        now: DateTime<Utc>,
    ) -> std::result::Result<(f64, f64), ExclusionReason> {
        // A window too large for chrono never expires anything
        let expired = match chrono::Duration::from_std(self.config.max_report_age()) {
            Ok(window) => now.signed_duration_since(report.timestamp) > window,
            Err(_) => false,
        };
        if expired {
            return Err(ExclusionReason::Expired);
        }

        let minutes = effective_minutes(&report.reading)?;
        let reliability = reliability(report).ok_or(ExclusionReason::InvalidReliability)?;

        Ok((minutes, reliability))
    }
}

impl WaitTimeEstimator for WeightedWaitTimeEstimator {
    fn estimate_detailed(&self, reports: &[Report], now: DateTime<Utc>) -> EstimateBreakdown {
        let mut contributions = Vec::with_capacity(reports.len());
        let mut exclusions = Vec::new();

        for report in reports {
            match self.classify(report, now) {
                Ok((effective_minutes, reliability)) => {
                    if report.timestamp > now {
                        warn!(
                            "Report {} is timestamped {} after evaluation time, treating as fresh",
                            report.id,
                            report.timestamp.signed_duration_since(now)
                        );
                    }
                    let weight = ReportWeight::compute(report, reliability, now, &self.config);
                    contributions.push(Contribution {
                        report_id: report.id,
                        effective_minutes,
                        weight,
                    });
                }
                Err(reason) => {
                    debug!("Excluding report {} from estimate: {:?}", report.id, reason);
                    exclusions.push(Exclusion {
                        report_id: report.id,
                        reason,
                    });
                }
            }
        }

        let max_reliability = contributions
            .iter()
            .map(|c| c.weight.reliability)
            .fold(0.0, f64::max);
        let total_weight: f64 = contributions
            .iter()
            .map(|c| c.weight.relative_to(max_reliability))
            .sum();

        if total_weight <= 0.0 {
            debug!(
                "No weighted reports ({} excluded), using zero estimate",
                exclusions.len()
            );
            return EstimateBreakdown {
                result: EstimateResult::zero(),
                weighted_minutes: None,
                total_weight: 0.0,
                contributions,
                exclusions,
            };
        }

        let weighted_sum: f64 = contributions
            .iter()
            .map(|c| c.weight.relative_to(max_reliability) * c.effective_minutes)
            .sum();
        let weighted_minutes = weighted_sum / total_weight;

        // Clamp before the cast so a huge average saturates rather than wraps
        let minutes = weighted_minutes.round().clamp(0.0, u32::MAX as f64) as u32;
        let result = EstimateResult {
            minutes,
            category: category_for_minutes(minutes),
        };

        debug!(
            "Estimated {} minutes ({}) from {} reports (total weight: {:.3}, excluded: {})",
            result.minutes,
            result.category,
            contributions.len(),
            total_weight,
            exclusions.len()
        );

        EstimateBreakdown {
            result,
            weighted_minutes: Some(weighted_minutes),
            total_weight,
            contributions,
            exclusions,
        }
    }

    fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn update_config(&mut self, config: EstimatorConfig) -> crate::error::Result<()> {
        config.validate()?;
        self.config = config;
        info!("Updated estimator configuration: {:?}", self.config);
        Ok(())
    }
}

/// Estimate with the canonical constants
pub fn estimate(reports: &[Report], now: DateTime<Utc>) -> EstimateResult {
    WeightedWaitTimeEstimator::default().estimate(reports, now)
}
