use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::types::{KmerRange, DEFAULT_KMAX, DEFAULT_KMIN};
use crate::core::window::{TruncationWindow, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START};
use crate::events::TracingObserver;
use crate::parsing::fasta::{read_references, write_fasta};
use crate::parsing::tsv::write_probe_table;
use crate::probes::generator::{GenerationSummary, GeneratorConfig, ProbeGenerator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Reference FASTA file (optionally gzip compressed)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Output probe table (reference_id<TAB>probe)
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Output FASTA of references for which no unique probe was found
    #[arg(short, long, required = true)]
    pub ambiguous: PathBuf,

    /// First base (0-based) of the region searched for probes.
    /// Negative values are clamped to 0
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_START, allow_hyphen_values = true)]
    pub start: i64,

    /// End (exclusive) of the region searched for probes.
    /// Values past the sequence end are clamped to its length; 0 is taken literally
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_END, allow_hyphen_values = true)]
    pub end: i64,

    /// Shortest probe length considered
    #[arg(long, default_value_t = DEFAULT_KMIN)]
    pub kmin: usize,

    /// Probe lengths considered are strictly below this value
    #[arg(long, default_value_t = DEFAULT_KMAX)]
    pub kmax: usize,
}

impl GenerateArgs {
    /// Convert arguments into a validated generator configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the k-mer range is empty or starts at zero.
    pub fn config(&self) -> anyhow::Result<GeneratorConfig> {
        Ok(GeneratorConfig {
            kmers: KmerRange::new(self.kmin, self.kmax)?,
            window: TruncationWindow::new(self.start, self.end),
        })
    }
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    input: &'a Path,
    probe_table: &'a Path,
    ambiguous_fasta: &'a Path,
    #[serde(flatten)]
    summary: &'a GenerationSummary,
}

/// Execute generate subcommand
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// parsed, or an output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: GenerateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = args.config()?;

    info!(kmin = config.kmers.kmin, kmax = config.kmers.kmax, "k-mer range");
    info!(
        start = config.window.start,
        end = config.window.end,
        "Truncation window"
    );
    if config.window.end <= config.window.start {
        warn!(
            start = config.window.start,
            end = config.window.end,
            "Truncation window is empty; every reference will be reported as ambiguous"
        );
    }

    let references = read_references(&args.input)?;
    info!(
        references = references.len(),
        input = %args.input.display(),
        "Loaded reference sequences"
    );

    let generator = ProbeGenerator::with_observer(config, &TracingObserver);
    let result = generator.run(&references);

    info!(output = %args.output.display(), "Writing probe table");
    write_probe_table(&args.output, &result.probes)?;

    info!(ambiguous = %args.ambiguous.display(), "Writing ambiguous sequences");
    write_fasta(&args.ambiguous, result.ambiguous.iter())?;

    info!(
        with_probe = result.summary.with_probe,
        references = result.summary.references,
        "Found unique probes"
    );

    let report = GenerateReport {
        input: &args.input,
        probe_table: &args.output,
        ambiguous_fasta: &args.ambiguous,
        summary: &result.summary,
    };

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text_report(report: &GenerateReport<'_>) {
    let summary = report.summary;
    println!("Probe Generation");
    println!("{}", "=".repeat(60));
    println!("Input:           {}", report.input.display());
    println!("k-mer range:     [{}, {})", summary.kmin, summary.kmax);
    println!(
        "Window:          [{}, {})",
        summary.window_start, summary.window_end
    );
    println!("References:      {}", summary.references);
    println!("With probe:      {}", summary.with_probe);
    println!("Ambiguous:       {}", summary.ambiguous);
    println!("\nProbe table:     {}", report.probe_table.display());
    println!("Ambiguous FASTA: {}", report.ambiguous_fasta.display());
}
