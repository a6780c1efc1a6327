use std::collections::HashMap;

use serde::Serialize;

use crate::core::types::{Outcome, UNMATCHED};

/// Per-outcome query counts, iterated in first-encountered order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassificationCounts {
    entries: Vec<(String, u64)>,

    /// Index: label -> index in entries vec
    label_to_index: HashMap<String, usize>,
}

impl ClassificationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one query for `outcome`
    pub fn record(&mut self, outcome: Outcome<'_>) {
        self.increment(outcome.label());
    }

    /// Add one to `label`, creating it at zero first if unseen
    pub fn increment(&mut self, label: &str) {
        if let Some(&idx) = self.label_to_index.get(label) {
            self.entries[idx].1 += 1;
            return;
        }
        self.label_to_index
            .insert(label.to_string(), self.entries.len());
        self.entries.push((label.to_string(), 1));
    }

    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.label_to_index
            .get(label)
            .map_or(0, |&idx| self.entries[idx].1)
    }

    #[must_use]
    pub fn unmatched(&self) -> u64 {
        self.get(UNMATCHED)
    }

    /// Total number of queries counted
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> ClassificationSummary {
        let queries = self.total();
        let unmatched = self.unmatched();
        ClassificationSummary {
            queries,
            matched: queries - unmatched,
            unmatched,
            references_hit: self.entries.len() - usize::from(unmatched > 0),
        }
    }
}

/// Totals describing one classification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub queries: u64,
    pub matched: u64,
    pub unmatched: u64,
    pub references_hit: usize,
}
