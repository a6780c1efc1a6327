use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use ref_probe::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("ref_probe=debug,info")
    } else {
        EnvFilter::new("ref_probe=warn")
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    // The log file always records run milestones; --verbose adds per-record events
    let file_filter = if cli.verbose {
        "ref_probe=debug"
    } else {
        "ref_probe=info"
    };
    let file_layer = match &cli.log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(EnvFilter::new(file_filter)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    info!("Program started");
    info!(call = ?std::env::args().collect::<Vec<_>>(), "Command line");

    match cli.command {
        cli::Commands::Generate(args) => {
            cli::generate::run(args, cli.format)?;
        }
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format)?;
        }
    }

    info!("Program finished running");

    Ok(())
}
