use std::collections::HashMap;

use tracing::warn;

use crate::core::types::ReferenceId;

/// A reference sequence read from FASTA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence {
    /// Full header text
    pub id: ReferenceId,

    /// Sequence bytes, exactly as read
    pub sequence: Vec<u8>,
}

impl ReferenceSequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: ReferenceId::new(id),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// References in first-seen order, keyed by id
#[derive(Debug, Default, Clone)]
pub struct ReferenceSet {
    references: Vec<ReferenceSequence>,

    /// Index: reference ID -> index in references vec
    id_to_index: HashMap<ReferenceId, usize>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference. A repeated id replaces the earlier sequence but keeps its position.
    pub fn insert(&mut self, reference: ReferenceSequence) {
        if let Some(&idx) = self.id_to_index.get(&reference.id) {
            warn!(
                id = %reference.id,
                "Duplicate reference id, replacing earlier sequence"
            );
            self.references[idx] = reference;
            return;
        }

        self.id_to_index
            .insert(reference.id.clone(), self.references.len());
        self.references.push(reference);
    }

    #[must_use]
    pub fn get(&self, id: &ReferenceId) -> Option<&ReferenceSequence> {
        self.id_to_index.get(id).map(|&idx| &self.references[idx])
    }

    #[must_use]
    pub fn position(&self, id: &ReferenceId) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceSequence> {
        self.references.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ReferenceSequence] {
        &self.references
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

impl FromIterator<ReferenceSequence> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = ReferenceSequence>>(iter: I) -> Self {
        let mut set = Self::new();
        for reference in iter {
            set.insert(reference);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a ReferenceSequence;
    type IntoIter = std::slice::Iter<'a, ReferenceSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
