//! Session-scoped selection of parameter sets.
//!
//! One ordered sequence of `(set, included)` entries, rebuilt from the scene
//! on every rescan and never persisted.

use crate::core::SetId;

/// One selectable parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEntry {
    /// The set this entry refers to.
    pub set: SetId,
    /// Whether the set participates in the next operation.
    pub included: bool,
}

/// Ordered selection state over the scanned parameter sets.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all entries with the given sets, all included.
    pub fn rebuild(&mut self, sets: impl IntoIterator<Item = SetId>) {
        self.entries = sets
            .into_iter()
            .map(|set| SelectionEntry { set, included: true })
            .collect();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in scan order.
    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter()
    }

    /// Iterate the included sets in scan order.
    pub fn included(&self) -> impl Iterator<Item = SetId> + '_ {
        self.entries.iter().filter(|e| e.included).map(|e| e.set)
    }

    /// Check whether a set is present and included.
    pub fn is_included(&self, set: SetId) -> bool {
        self.entries.iter().any(|e| e.set == set && e.included)
    }

    /// Set the inclusion flag of one entry. No-op if the set is not listed.
    pub fn set_included(&mut self, set: SetId, included: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.set == set) {
            entry.included = included;
        }
    }

    /// Include every entry.
    pub fn include_all(&mut self) {
        for entry in &mut self.entries {
            entry.included = true;
        }
    }

    /// Exclude every entry.
    pub fn exclude_all(&mut self) {
        for entry in &mut self.entries {
            entry.included = false;
        }
    }

    /// Flip every entry's inclusion flag.
    pub fn invert(&mut self) {
        for entry in &mut self.entries {
            entry.included = !entry.included;
        }
    }
}
