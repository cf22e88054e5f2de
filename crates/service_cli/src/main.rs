//! mcint - Monte Carlo Integration Comparison CLI
//!
//! This is the operational entry point for the integration workspace.
//!
//! # Commands
//!
//! - `mcint integrate --input <file>` - Compare the three strategies on a sample CSV
//! - `mcint sweep --input <file>` - Compare them across several sample counts
//! - `mcint check` - Show the effective configuration and self-test the engine
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the CSV adapter to the
//! estimation engine and renders its reports.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::RunArgs;
use config::CliConfig;

/// Monte Carlo integration strategy comparison
#[derive(Parser)]
#[command(name = "mcint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mcint.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the area under the sampled curve with every strategy
    Integrate {
        #[command(flatten)]
        run: RunArgs,

        /// Number of samples per strategy
        #[arg(short = 'n', long)]
        samples: Option<usize>,
    },

    /// Run the comparison for several sample counts
    Sweep {
        #[command(flatten)]
        run: RunArgs,

        /// Comma-separated sample counts (e.g. 100,1000,10000)
        #[arg(long, value_delimiter = ',')]
        counts: Option<Vec<usize>>,
    },

    /// Check configuration and run an engine self-test
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = CliConfig::load_or_default(&cli.config)?.with_env_override();

    match &cli.command {
        Commands::Integrate { run, samples } => commands::integrate::run(&config, run, *samples),
        Commands::Sweep { run, counts } => commands::sweep::run(&config, run, counts.as_deref()),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("Verbose mode enabled");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
