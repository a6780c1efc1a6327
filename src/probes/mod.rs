//! Probe generation: find a k-mer that identifies each reference uniquely.
//!
//! Generation runs in three phases over the full reference set:
//!
//! 1. **Index**: every k-mer of every length in `[kmin, kmax)` from each
//!    reference's truncated window goes into one global [`KmerIndex`](index::KmerIndex).
//! 2. **Select**: k-mers owned by exactly one reference become candidate probes;
//!    the shortest, then lexicographically smallest, is kept per reference.
//! 3. **Partition**: references without a probe form the ambiguous set.
//!
//! ## Example
//!
//! ```rust
//! use ref_probe::core::reference::{ReferenceSequence, ReferenceSet};
//! use ref_probe::core::types::KmerRange;
//! use ref_probe::core::window::TruncationWindow;
//! use ref_probe::probes::generator::{GeneratorConfig, ProbeGenerator};
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
//! assert_eq!(result.probes.len(), 2);
//! assert!(result.ambiguous.is_empty());
//! ```

pub mod candidates;
pub mod generator;
pub mod index;
pub mod selection;
pub mod table;
