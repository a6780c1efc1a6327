//! Command-line interface for ref-probe.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **generate**: Derive a unique probe for each reference sequence
//! - **classify**: Count query sequences by the first probe they contain
//!
//! ## Usage
//!
//! ```text
//! # Build a probe table from the first 300 bases of each reference
//! ref-probe generate -i refs.fa -o probes.tsv -a ambiguous.fa -s 0 -e 300
//!
//! # Classify reads against it, logging to a file
//! ref-probe --log classify.log classify -r probes.tsv -i reads.fa -o counts.tsv
//!
//! # JSON run summary for scripting
//! ref-probe --format json classify -r probes.tsv -i reads.fa.gz -o counts.tsv -t 8
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod classify;
pub mod generate;

#[derive(Parser)]
#[command(name = "ref-probe")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find unique k-mer probes for reference sequences and classify reads with them")]
#[command(
    long_about = "ref-probe works in two independent steps.\n\n`generate` reads a reference FASTA and finds, for each sequence, a k-mer that occurs in no other reference. References without such a k-mer are written to a separate FASTA.\n\n`classify` reads that probe table and a FASTA of queries, assigns each query to the first reference (in table order) whose probe it contains, and counts the results. Queries containing no probe are counted as 'unmatched'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of the run summary printed to stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Also write log messages to this file
    #[arg(short, long, global = true)]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a table of unique probes from reference sequences
    Generate(generate::GenerateArgs),

    /// Classify query sequences against a probe table
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
