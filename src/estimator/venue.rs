//! Per-venue estimation over a mixed report snapshot

use crate::estimator::calculator::WaitTimeEstimator;
use crate::types::{EstimateResult, Report, VenueId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// Reports belonging to a single venue
pub fn reports_for_venue(reports: &[Report], venue_id: &str) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| report.venue_id == venue_id)
        .cloned()
        .collect()
}

/// Group reports by venue
pub fn group_by_venue(reports: &[Report]) -> BTreeMap<VenueId, Vec<Report>> {
    let mut grouped: BTreeMap<VenueId, Vec<Report>> = BTreeMap::new();
    for report in reports {
        grouped
            .entry(report.venue_id.clone())
            .or_default()
            .push(report.clone());
    }
    grouped
}

/// Estimate every venue present in the snapshot independently
pub fn estimate_by_venue(
    estimator: &dyn WaitTimeEstimator,
    reports: &[Report],
    now: DateTime<Utc>,
) -> BTreeMap<VenueId, EstimateResult> {
    let estimates: BTreeMap<VenueId, EstimateResult> = group_by_venue(reports)
        .into_iter()
        .map(|(venue_id, venue_reports)| {
            let result = estimator.estimate(&venue_reports, now);
            (venue_id, result)
        })
        .collect();

    debug!(
        "Estimated {} venues from {} reports",
        estimates.len(),
        reports.len()
    );

    estimates
}
