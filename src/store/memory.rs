//! In-memory asset store.
//!
//! Reference implementation of [`AssetStore`]: a process-local store with the
//! same contract a file-backed host store provides (stable ids, unique
//! locators, record metadata, explicit commits). Used by the test suite and
//! by hosts that do not need durable files.

use std::collections::HashMap;

use crate::core::{AssetStore, Locator, MetaData, ParameterSet, SetId};
use crate::util::{Error, Result};

/// Name suffix given to copies created by [`AssetStore::create_copy`].
pub const COPY_SUFFIX: &str = "_copy";

/// One stored record: the set plus its storage-side state.
#[derive(Clone, Debug)]
struct Record {
    set: ParameterSet,
    locator: Locator,
    metadata: MetaData,
}

/// Process-local [`AssetStore`] implementation.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<SetId, Record>,
    by_locator: HashMap<Locator, SetId>,
    next_id: u64,
    dirty: bool,
    commits: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new set, assigning it a fresh id and a unique locator
    /// derived from its name.
    pub fn insert(&mut self, set: ParameterSet) -> SetId {
        let locator = self.unique_locator(set.name());
        self.insert_record(Record {
            set,
            locator,
            metadata: MetaData::new(),
        })
    }

    /// Number of stored sets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check whether an id is live.
    pub fn contains(&self, id: SetId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of commits performed so far.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Check whether there are uncommitted mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn insert_record(&mut self, record: Record) -> SetId {
        let id = SetId::from_raw(self.next_id);
        self.next_id += 1;
        self.by_locator.insert(record.locator.clone(), id);
        self.records.insert(id, record);
        self.dirty = true;
        id
    }

    /// Build a locator no live record uses, appending a counter on collision.
    fn unique_locator(&self, name: &str) -> Locator {
        let base = Locator::new(format!("assets/{name}.pset"));
        if !self.by_locator.contains_key(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = Locator::new(format!("assets/{name}_{n}.pset"));
            if !self.by_locator.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl AssetStore for MemoryStore {
    fn get(&self, id: SetId) -> Option<&ParameterSet> {
        self.records.get(&id).map(|r| &r.set)
    }

    fn get_mut(&mut self, id: SetId) -> Option<&mut ParameterSet> {
        match self.records.get_mut(&id) {
            Some(record) => {
                self.dirty = true;
                Some(&mut record.set)
            }
            None => None,
        }
    }

    fn create_copy(&mut self, original: SetId) -> Result<SetId> {
        let source = self
            .records
            .get(&original)
            .ok_or(Error::SetNotFound(original))?;

        let mut set = source.set.clone();
        set.set_name(format!("{}{}", set.name(), COPY_SUFFIX));
        let locator = self.unique_locator(set.name());

        Ok(self.insert_record(Record {
            set,
            locator,
            metadata: MetaData::new(),
        }))
    }

    fn delete(&mut self, id: SetId) -> Result<()> {
        let record = self.records.remove(&id).ok_or(Error::SetNotFound(id))?;
        self.by_locator.remove(&record.locator);
        self.dirty = true;
        Ok(())
    }

    fn locate(&self, id: SetId) -> Option<Locator> {
        self.records.get(&id).map(|r| r.locator.clone())
    }

    fn resolve(&self, locator: &Locator) -> Option<SetId> {
        self.by_locator.get(locator).copied()
    }

    fn set_metadata(&mut self, id: SetId, key: &str, value: &str) -> Result<()> {
        let record = self.records.get_mut(&id).ok_or(Error::SetNotFound(id))?;
        record.metadata.set(key, value);
        self.dirty = true;
        Ok(())
    }

    fn metadata(&self, id: SetId, key: &str) -> Option<String> {
        self.records
            .get(&id)
            .and_then(|r| r.metadata.get(key))
            .map(str::to_string)
    }

    fn commit(&mut self) -> Result<()> {
        self.commits += 1;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyKind, PropertyValue, Role, Schema, SchemaRef};

    fn schema() -> SchemaRef {
        Schema::new("toon/v2")
            .with("Glow", PropertyKind::Scalar)
            .with("MainTex", PropertyKind::Reference)
            .into_ref()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = MemoryStore::new();
        let id = store.insert(ParameterSet::new("skin", schema()));

        assert!(store.contains(id));
        assert_eq!(store.get(id).unwrap().name(), "skin");
        assert_eq!(
            store.locate(id).unwrap().as_str(),
            "assets/skin.pset"
        );
        assert_eq!(store.resolve(&Locator::new("assets/skin.pset")), Some(id));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut store = MemoryStore::new();
        let orig = store.insert(ParameterSet::new("skin", schema()));
        let copy = store.create_copy(orig).unwrap();

        assert_ne!(orig, copy);
        assert_eq!(store.get(copy).unwrap().name(), "skin_copy");
        assert_ne!(store.locate(orig), store.locate(copy));

        // Mutating the copy leaves the original untouched
        store
            .get_mut(copy)
            .unwrap()
            .set_value("Glow", PropertyValue::Scalar(1.0))
            .unwrap();
        assert_eq!(
            store.get(orig).unwrap().value("Glow"),
            Some(&PropertyValue::Scalar(0.0))
        );
    }

    #[test]
    fn test_copy_starts_with_fresh_metadata() {
        let mut store = MemoryStore::new();
        let orig = store.insert(ParameterSet::new("skin", schema()));
        store.set_metadata(orig, "note", "hand-authored").unwrap();

        let copy = store.create_copy(orig).unwrap();
        assert_eq!(store.metadata(copy, "note"), None);
        assert_eq!(store.metadata(orig, "note"), Some("hand-authored".to_string()));
        assert_eq!(store.get(copy).unwrap().role(), Role::Original);
    }

    #[test]
    fn test_locator_collision_gets_counter() {
        let mut store = MemoryStore::new();
        let a = store.insert(ParameterSet::new("skin", schema()));
        let b = store.insert(ParameterSet::new("skin", schema()));

        assert_eq!(store.locate(a).unwrap().as_str(), "assets/skin.pset");
        assert_eq!(store.locate(b).unwrap().as_str(), "assets/skin_1.pset");
    }

    #[test]
    fn test_delete_frees_locator() {
        let mut store = MemoryStore::new();
        let id = store.insert(ParameterSet::new("skin", schema()));
        let locator = store.locate(id).unwrap();

        store.delete(id).unwrap();
        assert!(!store.contains(id));
        assert_eq!(store.resolve(&locator), None);
        assert!(matches!(store.delete(id), Err(Error::SetNotFound(_))));
    }

    #[test]
    fn test_commit_clears_dirty() {
        let mut store = MemoryStore::new();
        assert!(!store.is_dirty());

        store.insert(ParameterSet::new("skin", schema()));
        assert!(store.is_dirty());

        store.commit().unwrap();
        assert!(!store.is_dirty());
        assert_eq!(store.commit_count(), 1);
    }
}
