//! Check command implementation
//!
//! Prints the effective configuration and runs a small self-test of the
//! estimation engine.

use integral_mc::{compare_sequences, MonteCarloConfig, SamplingStrategy};
use std::path::Path;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig, config_path: &Path) -> Result<()> {
    info!("Checking configuration...");

    if config_path.exists() {
        println!("Config file:      {}", config_path.display());
    } else {
        println!("Config file:      {} (not found, using defaults)", config_path.display());
    }
    println!("{}", describe(config));

    config.validate()?;
    println!("Configuration:    OK");

    self_test()?;
    println!("Engine self-test: OK");

    info!("Check complete");
    Ok(())
}

/// Human-readable summary of the effective configuration.
pub fn describe(config: &CliConfig) -> String {
    let seed = match config.seed {
        Some(seed) => seed.to_string(),
        None => "(entropy)".to_string(),
    };
    let counts: Vec<String> = config.sweep_counts.iter().map(usize::to_string).collect();

    format!(
        "Samples:          {}\n\
         Seed:             {}\n\
         Stratified:       {}\n\
         X column:         {}\n\
         Y column:         {}\n\
         Format:           {}\n\
         Sweep counts:     {}",
        config.samples,
        seed,
        config.stratified,
        config.x_column,
        config.y_column,
        config.format,
        counts.join(", ")
    )
}

/// Integrates the identity line on [0, 10], whose area is exactly 50.
///
/// The midpoint stratified estimate of a straight line is exact, so any
/// deviation points at a broken build.
pub fn self_test() -> Result<()> {
    let xs = [0.0, 10.0];
    let config = MonteCarloConfig::builder()
        .n_samples(1_000)
        .seed(1)
        .build()
        .map_err(integral_mc::EstimationError::from)?;
    let report = compare_sequences(&xs, &xs, &config)?;

    let stratified = report
        .record(SamplingStrategy::Stratified)
        .map(|r| r.absolute_error)
        .unwrap_or(f64::INFINITY);

    if (report.reference_area - 50.0).abs() > 1e-12 || stratified > 1e-9 {
        warn!(
            reference = report.reference_area,
            stratified_error = stratified,
            "self-test mismatch"
        );
        return Err(CliError::InvalidArgument(format!(
            "self-test failed: reference {}, stratified error {}",
            report.reference_area, stratified
        )));
    }
    Ok(())
}
