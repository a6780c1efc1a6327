//! Readers and writers for the flat files the pipelines exchange.
//!
//! - **FASTA** ([`fasta`]): reference and query sequences in, ambiguous references out.
//!   Plain or gzip/bgzip compressed input.
//! - **TSV** ([`tsv`]): the probe table (`reference_id<TAB>probe`) and the
//!   classification counts (`reference_id<TAB>count`). No header row.
//!
//! ## Example
//!
//! ```rust
//! use ref_probe::parsing::tsv::parse_probe_table_text;
//!
//! let table = parse_probe_table_text("ref1\tACGTACGT\nref2\tTTGACCA\n").unwrap();
//! assert_eq!(table.len(), 2);
//!
//! assert!(parse_probe_table_text("ref1 ACGTACGT\n").is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod fasta;
pub mod tsv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot open input file: {}", path.display())]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write output file: {}", path.display())]
    OutputNotWritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed probe table line {line}: {content:?} (expected reference_id<TAB>probe)")]
    MalformedReferenceLine { line: usize, content: String },

    #[error("Input file is not valid UTF-8 text: {}", path.display())]
    InvalidText {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),
}
