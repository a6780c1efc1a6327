//! # ref-probe
//!
//! A library for finding short sequences ("probes") that identify each of a set
//! of reference sequences, and for classifying reads with them.
//!
//! Given references that are closely related (variable regions, alleles,
//! strains), `ref-probe` finds for each one a k-mer that occurs in no other
//! reference. Reads are later assigned to the first reference, in probe-table
//! order, whose probe they contain.
//!
//! ## Features
//!
//! - **Global uniqueness**: a k-mer qualifies only if no other reference contains it
//! - **Truncation windows**: search only a region of each reference
//! - **Deterministic selection**: shortest probe, then lexicographically smallest
//! - **Ambiguous output**: references without a unique k-mer are kept, unmodified
//! - **First-match classification**: streaming, optionally parallel
//!
//! ## Example
//!
//! ```rust
//! use ref_probe::{
//!     GeneratorConfig, KmerRange, ProbeGenerator, ReferenceSequence, ReferenceSet,
//!     SequenceClassifier, TruncationWindow,
//! };
//!
//! let references: ReferenceSet = vec![
//!     ReferenceSequence::new("A", "AAACCCTTT"),
//!     ReferenceSequence::new("B", "GGGTTTAAA"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = GeneratorConfig {
//!     kmers: KmerRange::new(3, 5).unwrap(),
//!     window: TruncationWindow::new(0, 100),
//! };
//! let result = ProbeGenerator::new(config).run(&references);
//!
//! let classifier = SequenceClassifier::new(&result.probes);
//! assert_eq!(classifier.find_match(b"TTAAACCCTT").label(), "A");
//! assert_eq!(classifier.find_match(b"CCCCCCCC").label(), "unmatched");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Reference sequences, ids, k-mer ranges and truncation windows
//! - [`probes`]: K-mer index, unique probe selection and the generator
//! - [`classify`]: First-match classification and outcome counts
//! - [`events`]: Observer hooks the pipelines report progress through
//! - [`parsing`]: FASTA and TSV readers and writers
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod events;
pub mod parsing;
pub mod probes;

// Re-export commonly used types for convenience
pub use crate::classify::counts::ClassificationCounts;
pub use crate::classify::engine::{first_match, ClassifierConfig, SequenceClassifier};
pub use crate::core::reference::{ReferenceSequence, ReferenceSet};
pub use crate::core::types::*;
pub use crate::core::window::TruncationWindow;
pub use crate::events::{NoopObserver, PipelineObserver, TracingObserver};
pub use crate::probes::generator::{GeneratorConfig, ProbeGenerator};
pub use crate::probes::table::ProbeTable;
