use std::collections::HashMap;

use crate::core::reference::ReferenceSequence;
use crate::core::types::KmerRange;
use crate::core::window::TruncationWindow;
use crate::events::PipelineObserver;
use crate::probes::candidates::{candidate_count, generate_candidates};

/// Global map from k-mer to the references that produced it.
///
/// Owners are positions into the reference slice the index was built from.
/// Every occurrence is recorded, so a k-mer repeated within one reference
/// lists that reference more than once.
#[derive(Debug)]
pub struct KmerIndex<'a> {
    references: &'a [ReferenceSequence],
    kmer_to_refs: HashMap<&'a [u8], Vec<usize>>,
}

impl<'a> KmerIndex<'a> {
    /// Index the candidates of every reference's truncated window.
    pub fn build(
        references: &'a [ReferenceSequence],
        window: TruncationWindow,
        range: KmerRange,
        observer: &dyn PipelineObserver,
    ) -> Self {
        let mut kmer_to_refs: HashMap<&'a [u8], Vec<usize>> = HashMap::new();

        for (idx, reference) in references.iter().enumerate() {
            let effective = window.clamp(reference.len());
            let truncated = effective.slice(&reference.sequence);

            for kmer in generate_candidates(truncated, range) {
                observer.candidate_generated(&reference.id, kmer);
                kmer_to_refs.entry(kmer).or_default().push(idx);
            }

            let candidates = candidate_count(truncated.len(), range);
            observer.reference_indexed(&reference.id, reference.len(), effective, candidates);
        }

        Self {
            references,
            kmer_to_refs,
        }
    }

    /// The references this index was built from, in load order
    #[must_use]
    pub fn references(&self) -> &'a [ReferenceSequence] {
        self.references
    }

    /// Owner positions recorded for a k-mer
    #[must_use]
    pub fn owners(&self, kmer: &[u8]) -> Option<&[usize]> {
        self.kmer_to_refs.get(kmer).map(Vec::as_slice)
    }

    /// The single distinct owner of a k-mer, if it has exactly one
    #[must_use]
    pub fn unique_owner(&self, kmer: &[u8]) -> Option<usize> {
        self.owners(kmer).and_then(single_owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], &[usize])> + '_ {
        self.kmer_to_refs
            .iter()
            .map(|(kmer, owners)| (*kmer, owners.as_slice()))
    }

    /// Number of distinct k-mers
    #[must_use]
    pub fn len(&self) -> usize {
        self.kmer_to_refs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kmer_to_refs.is_empty()
    }
}

/// Returns the owner if every entry names the same reference
pub(crate) fn single_owner(owners: &[usize]) -> Option<usize> {
    let (&first, rest) = owners.split_first()?;
    rest.iter().all(|&o| o == first).then_some(first)
}

/// Build the global k-mer index over all references.
pub fn build_kmer_index<'a>(
    references: &'a [ReferenceSequence],
    window: TruncationWindow,
    range: KmerRange,
    observer: &dyn PipelineObserver,
) -> KmerIndex<'a> {
    KmerIndex::build(references, window, range, observer)
}
