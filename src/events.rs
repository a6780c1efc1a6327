//! Observer hooks for the generation and classification pipelines.
//!
//! The algorithms report what they do through [`PipelineObserver`] instead of
//! logging directly. [`TracingObserver`] forwards everything to `tracing`;
//! [`NoopObserver`] discards it. Results never depend on the observer.

use tracing::{debug, trace};

use crate::core::types::{Outcome, ReferenceId};
use crate::core::window::EffectiveWindow;

/// Receives progress events from the pipelines. All methods default to no-ops.
pub trait PipelineObserver: Send + Sync {
    /// A reference's window was scanned for candidate k-mers
    fn reference_indexed(
        &self,
        _id: &ReferenceId,
        _length: usize,
        _window: EffectiveWindow,
        _candidates: usize,
    ) {
    }

    /// One candidate k-mer was extracted for a reference
    fn candidate_generated(&self, _id: &ReferenceId, _kmer: &[u8]) {}

    /// A unique probe was chosen for a reference
    fn probe_selected(&self, _id: &ReferenceId, _probe: &[u8]) {}

    /// No unique k-mer exists for a reference
    fn reference_ambiguous(&self, _id: &ReferenceId) {}

    /// A query sequence was classified
    fn query_classified(&self, _query: &str, _outcome: Outcome<'_>) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn reference_indexed(
        &self,
        id: &ReferenceId,
        length: usize,
        window: EffectiveWindow,
        candidates: usize,
    ) {
        debug!(
            id = %id,
            length,
            window = %window,
            truncated_length = window.len(),
            candidates,
            "Indexed reference"
        );
    }

    fn candidate_generated(&self, id: &ReferenceId, kmer: &[u8]) {
        trace!(id = %id, kmer = %String::from_utf8_lossy(kmer), "Candidate k-mer");
    }

    fn probe_selected(&self, id: &ReferenceId, probe: &[u8]) {
        debug!(id = %id, probe = %String::from_utf8_lossy(probe), "Selected unique probe");
    }

    fn reference_ambiguous(&self, id: &ReferenceId) {
        debug!(id = %id, "No unique k-mer found");
    }

    fn query_classified(&self, query: &str, outcome: Outcome<'_>) {
        match outcome {
            Outcome::Matched(id) => debug!(query, reference = %id, "Identified reference"),
            Outcome::Unmatched => debug!(query, "No probe matched"),
        }
    }
}
