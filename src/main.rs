//! Command-line entry point for the waitline estimator
//!
//! Reads a JSON array of wait reports, estimates the current line for one
//! venue or for every venue in the snapshot, and prints the result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use waitline::config::AppConfig;
use waitline::snapshot::{parse_reports, render_estimates, resolve_now, SnapshotQuery};
use waitline::types::Report;
use waitline::WeightedWaitTimeEstimator;

/// Waitline - weighted line wait-time estimation
#[derive(Parser)]
#[command(
    name = "waitline",
    version,
    about = "Estimate venue wait lines from crowd-sourced reports",
    long_about = "Waitline aggregates user-submitted line reports into a single wait estimate \
                 per venue, weighting each report by age decay, vote ratio and submitter \
                 reliability, and buckets the result into a line category."
)]
struct Args {
    /// Reports file (JSON array); reads stdin when omitted or "-"
    #[arg(value_name = "REPORTS")]
    reports: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Only estimate this venue
    #[arg(long, value_name = "VENUE_ID")]
    venue: Option<String>,

    /// Evaluation instant (RFC 3339), defaults to the current time
    #[arg(long, value_name = "INSTANT")]
    now: Option<String>,

    /// Include per-report weights and exclusions (requires --venue)
    #[arg(long, requires = "venue")]
    detailed: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading reports")]
    dry_run: bool,
}

/// Initialize structured logging on stderr so stdout stays machine readable
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    waitline::config::validate_config(&config)?;
    Ok(config)
}

/// Read the report snapshot from a file or stdin
fn read_reports(path: Option<&PathBuf>) -> Result<Vec<Report>> {
    let contents = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reports from {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read reports from stdin")?;
            buffer
        }
    };

    parse_reports(&contents)
}

fn display_config(config: &AppConfig) {
    info!("{}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!(
        "   Max report age: {}s",
        config.estimator.max_report_age_seconds
    );
    info!("   Decay base: {}", config.estimator.decay_base);
    info!(
        "   Vote impact factor: {}",
        config.estimator.vote_impact_factor
    );
}

fn run(args: Args, config: AppConfig) -> Result<()> {
    let estimator = WeightedWaitTimeEstimator::new(config.estimator.clone())?;
    let now = resolve_now(args.now.as_deref())?;

    let reports = read_reports(args.reports.as_ref())?;
    debug!("Loaded {} reports", reports.len());

    let query = SnapshotQuery {
        venue: args.venue,
        detailed: args.detailed,
    };
    println!("{}", render_estimates(&estimator, &reports, now, &query)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_config(&config);
        return Ok(());
    }

    display_config(&config);
    run(args, config)
}
