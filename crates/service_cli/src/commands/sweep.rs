//! Sweep command implementation
//!
//! Runs the comparison for several sample counts on the same data and seed,
//! producing a convergence table.

use integral_mc::Comparator;
use tracing::info;

use super::{render, RunArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the sweep command
pub fn run(config: &CliConfig, args: &RunArgs, counts: Option<&[usize]>) -> Result<()> {
    let output = execute(config, args, counts)?;
    println!("{}", output);
    Ok(())
}

/// Performs the sweep and returns the rendered output.
pub fn execute(config: &CliConfig, args: &RunArgs, counts: Option<&[usize]>) -> Result<String> {
    let mut config = config.clone();
    if let Some(counts) = counts {
        config.sweep_counts = counts.to_vec();
    }
    let settings = args.resolve(&config, None)?;
    let counts = &settings.config.sweep_counts;

    info!("Starting sweep...");
    info!("  Input: {}", args.input.display());
    info!("  Sample counts: {:?}", counts);

    let data = settings.loader.load_path(&args.input)?;
    let mut comparator = Comparator::new(settings.mc.clone());
    let reports = comparator.sweep(&data, counts)?;

    info!("Sweep complete ({} runs)", reports.len());
    render::sweep(&reports, settings.format)
}
