//! Main application configuration
//!
//! This module defines the configuration structures for the waitline
//! estimator, including environment variable and TOML file loading.

use crate::estimator::config::EstimatorConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub estimator: EstimatorConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "waitline".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .map_err(|e| anyhow!("Invalid configuration TOML in {}: {}", path.display(), e))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration TOML: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Estimator settings
        if let Ok(max_age) = env::var("MAX_REPORT_AGE_SECONDS") {
            self.estimator.max_report_age_seconds = max_age
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_REPORT_AGE_SECONDS value: {}", max_age))?;
        }
        if let Ok(decay) = env::var("DECAY_BASE") {
            self.estimator.decay_base = decay
                .parse()
                .map_err(|_| anyhow!("Invalid DECAY_BASE value: {}", decay))?;
        }
        if let Ok(impact) = env::var("VOTE_IMPACT_FACTOR") {
            self.estimator.vote_impact_factor = impact
                .parse()
                .map_err(|_| anyhow!("Invalid VOTE_IMPACT_FACTOR value: {}", impact))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.estimator.validate()
}
