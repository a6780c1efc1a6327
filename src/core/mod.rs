//! Core data types shared by probe generation and classification.
//!
//! - [`ReferenceSequence`](reference::ReferenceSequence): one FASTA record (id + bases)
//! - [`ReferenceSet`](reference::ReferenceSet): references in first-seen order, keyed by id
//! - [`TruncationWindow`](window::TruncationWindow): the `[start, end)` region searched for probes
//! - [`KmerRange`](types::KmerRange), [`ReferenceId`](types::ReferenceId), [`Outcome`](types::Outcome)
//!
//! ## Windows
//!
//! | start | end | length | window  |
//! |-------|-----|--------|---------|
//! | -5    | 100 | 10     | `[0,10)` |
//! | 2     | 0   | 10     | `[2,0)` (empty) |
//! | 1     | 0   | any    | empty (the default) |

pub mod reference;
pub mod types;
pub mod window;
