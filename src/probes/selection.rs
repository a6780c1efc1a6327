use crate::core::reference::ReferenceSequence;
use crate::probes::index::{single_owner, KmerIndex};
use crate::probes::table::ProbeTable;

/// Pick one unique k-mer per reference.
///
/// A k-mer qualifies when every recorded owner is the same reference. When a
/// reference has several qualifying k-mers the shortest wins, and among equal
/// lengths the lexicographically smallest byte string wins, so the choice never
/// depends on hash-map iteration order. Entries follow reference load order.
#[must_use]
pub fn select_unique_probes(index: &KmerIndex<'_>) -> ProbeTable {
    let references = index.references();
    let mut best: Vec<Option<&[u8]>> = vec![None; references.len()];

    for (kmer, owners) in index.iter() {
        let Some(owner) = single_owner(owners) else {
            continue;
        };
        let slot = &mut best[owner];
        if slot.map_or(true, |current| prefer(kmer, current)) {
            *slot = Some(kmer);
        }
    }

    references
        .iter()
        .zip(best)
        .filter_map(|(reference, probe)| probe.map(|p| (reference.id.0.clone(), p.to_vec())))
        .collect()
}

/// Shorter first, then lexicographic
fn prefer(candidate: &[u8], current: &[u8]) -> bool {
    (candidate.len(), candidate) < (current.len(), current)
}

/// References left without a probe, in load order
#[derive(Debug, Default, Clone)]
pub struct AmbiguousSet<'a> {
    references: Vec<&'a ReferenceSequence>,
}

impl<'a> AmbiguousSet<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a ReferenceSequence> + '_ {
        self.references.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// Every reference whose id has no probe in `probe_table`.
///
/// The untruncated sequences are kept for output.
#[must_use]
pub fn partition<'a>(
    references: &'a [ReferenceSequence],
    probe_table: &ProbeTable,
) -> AmbiguousSet<'a> {
    AmbiguousSet {
        references: references
            .iter()
            .filter(|r| !probe_table.contains(&r.id))
            .collect(),
    }
}
