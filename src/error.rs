//! Error types for the wait-time estimator
//!
//! Estimation itself never fails; these errors cover configuration and
//! report input handled around it.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for configuration and input handling
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid report input: {reason}")]
    InvalidReportInput { reason: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}
