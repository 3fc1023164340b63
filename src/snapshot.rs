//! Report snapshot handling for the command-line surface
//!
//! Parses a JSON snapshot, resolves the evaluation instant and renders
//! estimates as JSON, so the binary only deals with files and streams.

use crate::error::{EstimatorError, Result};
use crate::estimator::calculator::WaitTimeEstimator;
use crate::estimator::venue::{estimate_by_venue, reports_for_venue};
use crate::types::Report;
use crate::utils::{current_timestamp, parse_instant};
use chrono::{DateTime, Utc};
use tracing::debug;

/// What to estimate from a snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotQuery {
    /// Restrict the estimate to one venue
    pub venue: Option<String>,
    /// Include per-report weights and exclusions (single venue only)
    pub detailed: bool,
}

/// Parse a JSON array of reports
pub fn parse_reports(json: &str) -> Result<Vec<Report>> {
    serde_json::from_str(json).map_err(|e| {
        EstimatorError::InvalidReportInput {
            reason: e.to_string(),
        }
        .into()
    })
}

/// Evaluation instant from an optional RFC 3339 value, defaulting to now
pub fn resolve_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(value) => parse_instant(value),
        None => Ok(current_timestamp()),
    }
}

/// Estimate the snapshot and render the result as pretty JSON
pub fn render_estimates(
    estimator: &dyn WaitTimeEstimator,
    reports: &[Report],
    now: DateTime<Utc>,
    query: &SnapshotQuery,
) -> Result<String> {
    debug!("Estimating {} reports at {}", reports.len(), now);

    let output = match (&query.venue, query.detailed) {
        (Some(venue_id), true) => {
            let venue_reports = reports_for_venue(reports, venue_id);
            serde_json::to_string_pretty(&estimator.estimate_detailed(&venue_reports, now))?
        }
        (Some(venue_id), false) => {
            let venue_reports = reports_for_venue(reports, venue_id);
            serde_json::to_string_pretty(&estimator.estimate(&venue_reports, now))?
        }
        (None, true) => {
            return Err(EstimatorError::InvalidReportInput {
                reason: "detailed output requires a venue".to_string(),
            }
            .into())
        }
        (None, false) => serde_json::to_string_pretty(&estimate_by_venue(estimator, reports, now))?,
    };

    Ok(output)
}
