use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::counts::{ClassificationCounts, ClassificationSummary};
use crate::classify::engine::{ClassifierConfig, SequenceClassifier, DEFAULT_BATCH_SIZE};
use crate::cli::OutputFormat;
use crate::events::TracingObserver;
use crate::parsing::fasta::open_fasta;
use crate::parsing::tsv::{read_probe_table, write_counts};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Probe table produced by `generate` (reference_id<TAB>probe)
    #[arg(short, long, required = true)]
    pub reference: PathBuf,

    /// FASTA file of query sequences (optionally gzip compressed)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Output counts table (reference_id<TAB>count)
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// Queries buffered per batch when running with more than one thread
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl From<&ClassifyArgs> for ClassifierConfig {
    fn from(args: &ClassifyArgs) -> Self {
        Self {
            threads: args.threads.max(1),
            batch_size: args.batch_size.max(1),
        }
    }
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    probe_table: &'a Path,
    input: &'a Path,
    output: &'a Path,
    probes: usize,
    #[serde(flatten)]
    summary: ClassificationSummary,
    counts: Vec<CountRow<'a>>,
}

#[derive(Serialize)]
struct CountRow<'a> {
    id: &'a str,
    count: u64,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the probe table is malformed, the queries cannot be
/// parsed, or the output file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = ClassifierConfig::from(&args);

    let probe_table = read_probe_table(&args.reference)?;
    info!(
        probes = probe_table.len(),
        reference = %args.reference.display(),
        "Loaded probe table"
    );
    if probe_table.is_empty() {
        warn!("Probe table is empty; every query will be unmatched");
    }

    if config.threads > 1 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure worker threads, using existing pool");
        }
    }

    let queries = open_fasta(&args.input)?;
    let classifier = SequenceClassifier::with_config(&probe_table, config, &TracingObserver);
    let counts = classifier.classify_stream(queries)?;

    info!(output = %args.output.display(), "Writing counts");
    write_counts(&args.output, &counts)?;

    let summary = counts.summary();
    info!(
        queries = summary.queries,
        matched = summary.matched,
        unmatched = summary.unmatched,
        "Classification finished"
    );

    let report = ClassifyReport {
        probe_table: &args.reference,
        input: &args.input,
        output: &args.output,
        probes: probe_table.len(),
        summary,
        counts: count_rows(&counts),
    };

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn count_rows(counts: &ClassificationCounts) -> Vec<CountRow<'_>> {
    counts
        .iter()
        .map(|(id, count)| CountRow { id, count })
        .collect()
}

fn print_text_report(report: &ClassifyReport<'_>) {
    let summary = &report.summary;
    println!("Classification");
    println!("{}", "=".repeat(60));
    println!("Probe table:  {} ({} probes)", report.probe_table.display(), report.probes);
    println!("Input:        {}", report.input.display());
    println!("Queries:      {}", summary.queries);
    println!("Matched:      {}", summary.matched);
    println!("Unmatched:    {}", summary.unmatched);
    println!("References:   {} with at least one query", summary.references_hit);
    println!("\nCounts:       {}", report.output.display());
}
