//! Integrate command implementation
//!
//! Loads a sample CSV, runs the three strategies once and prints the ranked
//! comparison.

use integral_mc::Comparator;
use tracing::info;

use super::{render, RunArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the integrate command
pub fn run(config: &CliConfig, args: &RunArgs, samples: Option<usize>) -> Result<()> {
    let output = execute(config, args, samples)?;
    println!("{}", output);
    Ok(())
}

/// Performs the comparison and returns the rendered output.
pub fn execute(config: &CliConfig, args: &RunArgs, samples: Option<usize>) -> Result<String> {
    let settings = args.resolve(config, samples)?;

    info!("Starting integration...");
    info!("  Input: {}", args.input.display());
    info!(
        "  Columns: {} / {}",
        settings.loader.x_column(),
        settings.loader.y_column()
    );
    info!("  Samples per strategy: {}", settings.mc.n_samples());
    info!("  Stratified: {}", settings.mc.stratified());

    let data = settings.loader.load_path(&args.input)?;
    let mut comparator = Comparator::new(settings.mc);
    let report = comparator.run(&data)?;

    info!("Integration complete");
    render::report(&report, settings.format)
}
