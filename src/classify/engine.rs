use rayon::prelude::*;

use crate::classify::counts::ClassificationCounts;
use crate::core::reference::ReferenceSequence;
use crate::core::types::Outcome;
use crate::events::{NoopObserver, PipelineObserver};
use crate::probes::table::ProbeTable;

/// Default number of queries buffered per parallel batch
pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Configuration for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Worker threads; 1 classifies on the calling thread
    pub threads: usize,
    /// Queries matched together per parallel batch
    pub batch_size: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Return the first entry, in table order, whose probe occurs in `query`.
///
/// This is first-match, not best-match: an earlier entry wins even if a
/// later probe is longer or occurs earlier in the query.
#[must_use]
pub fn first_match<'t>(query: &[u8], probe_table: &'t ProbeTable) -> Outcome<'t> {
    probe_table
        .iter()
        .find(|entry| contains_subsequence(query, &entry.probe))
        .map_or(Outcome::Unmatched, |entry| Outcome::Matched(&entry.id))
}

fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Classifies query sequences against a loaded probe table
pub struct SequenceClassifier<'t, 'o> {
    probe_table: &'t ProbeTable,
    config: ClassifierConfig,
    observer: &'o dyn PipelineObserver,
}

impl<'t> SequenceClassifier<'t, 'static> {
    pub fn new(probe_table: &'t ProbeTable) -> Self {
        Self {
            probe_table,
            config: ClassifierConfig::default(),
            observer: &NoopObserver,
        }
    }
}

impl<'t, 'o> SequenceClassifier<'t, 'o> {
    pub fn with_config(
        probe_table: &'t ProbeTable,
        config: ClassifierConfig,
        observer: &'o dyn PipelineObserver,
    ) -> Self {
        Self {
            probe_table,
            config,
            observer,
        }
    }

    /// Classify a single query sequence
    #[must_use]
    pub fn find_match(&self, query: &[u8]) -> Outcome<'t> {
        first_match(query, self.probe_table)
    }

    /// Classify every query and count outcomes.
    ///
    /// Queries are consumed one at a time, or in batches of
    /// `config.batch_size` when more than one thread is configured. Counts and
    /// their order are the same either way.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `queries`; nothing is counted after it.
    pub fn classify_stream<I, E>(&self, queries: I) -> Result<ClassificationCounts, E>
    where
        I: IntoIterator<Item = Result<ReferenceSequence, E>>,
    {
        let mut counts = ClassificationCounts::new();

        if self.config.threads <= 1 {
            for query in queries {
                let query = query?;
                let outcome = self.find_match(&query.sequence);
                self.observer.query_classified(query.id.as_str(), outcome);
                counts.record(outcome);
            }
            return Ok(counts);
        }

        let batch_size = self.config.batch_size.max(1);
        let mut batch = Vec::with_capacity(batch_size);
        for query in queries {
            batch.push(query?);
            if batch.len() == batch_size {
                self.classify_batch(&batch, &mut counts);
                batch.clear();
            }
        }
        self.classify_batch(&batch, &mut counts);

        Ok(counts)
    }

    fn classify_batch(&self, batch: &[ReferenceSequence], counts: &mut ClassificationCounts) {
        let outcomes: Vec<Outcome<'t>> = batch
            .par_iter()
            .map(|query| self.find_match(&query.sequence))
            .collect();

        for (query, outcome) in batch.iter().zip(outcomes) {
            self.observer.query_classified(query.id.as_str(), outcome);
            counts.record(outcome);
        }
    }
}
