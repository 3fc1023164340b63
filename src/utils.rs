//! Utility functions for the wait-time estimator

use crate::error::EstimatorError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique report ID
pub fn generate_report_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an RFC 3339 instant into UTC, whatever offset it was written with
pub fn parse_instant(value: &str) -> crate::error::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            EstimatorError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}
