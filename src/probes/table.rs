use std::collections::HashMap;

use crate::core::types::ReferenceId;

/// One row of a probe table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEntry {
    pub id: ReferenceId,
    pub probe: Vec<u8>,
}

/// Reference id -> probe, iterated in insertion order.
///
/// The order matters: classification returns the first entry whose probe
/// occurs in a query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProbeTable {
    entries: Vec<ProbeEntry>,

    /// Index: reference ID -> index in entries vec
    id_to_index: HashMap<ReferenceId, usize>,
}

impl ProbeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probe for `id`. Re-inserting an id replaces its probe but keeps its position.
    pub fn insert(&mut self, id: ReferenceId, probe: Vec<u8>) {
        if let Some(&idx) = self.id_to_index.get(&id) {
            self.entries[idx].probe = probe;
            return;
        }
        self.id_to_index.insert(id.clone(), self.entries.len());
        self.entries.push(ProbeEntry { id, probe });
    }

    #[must_use]
    pub fn get(&self, id: &ReferenceId) -> Option<&[u8]> {
        self.id_to_index
            .get(id)
            .map(|&idx| self.entries[idx].probe.as_slice())
    }

    #[must_use]
    pub fn contains(&self, id: &ReferenceId) -> bool {
        self.id_to_index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProbeTable {
    type Item = &'a ProbeEntry;
    type IntoIter = std::slice::Iter<'a, ProbeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Into<String>, P: Into<Vec<u8>>> FromIterator<(I, P)> for ProbeTable {
    fn from_iter<T: IntoIterator<Item = (I, P)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (id, probe) in iter {
            table.insert(ReferenceId::new(id), probe.into());
        }
        table
    }
}
