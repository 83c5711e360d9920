//! Abstract traits for the host-owned collaborators.
//!
//! These traits define the interface between the merge core and the
//! environment that owns the persistent assets:
//! - [`AssetStore`] - creation, lookup, metadata, and durable commit of
//!   stored parameter sets
//! - [`RefreshHook`] - optional post-merge schema refresh capability

use std::fmt;

use crate::core::{ParameterSet, SetId};
use crate::util::Result;

/// Stable locator of a stored parameter set (e.g. a storage path).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Create a locator from a path-like string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The locator string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the locator is empty (never resolvable).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Asset Store
// ============================================================================

/// Persistent store of parameter sets.
///
/// The host environment owns the store; the merge core only calls through
/// this trait and never performs file I/O itself. Mutations accumulate until
/// [`commit`](Self::commit), which each top-level session operation calls
/// exactly once at its end.
pub trait AssetStore {
    /// Get a stored set by id.
    fn get(&self, id: SetId) -> Option<&ParameterSet>;

    /// Get a stored set mutably by id.
    fn get_mut(&mut self, id: SetId) -> Option<&mut ParameterSet>;

    /// Create an independent copy of a stored set under a fresh identity
    /// and locator. The copy starts with empty record metadata.
    fn create_copy(&mut self, original: SetId) -> Result<SetId>;

    /// Delete a stored set.
    fn delete(&mut self, id: SetId) -> Result<()>;

    /// Get the stable locator of a stored set.
    fn locate(&self, id: SetId) -> Option<Locator>;

    /// Resolve a locator back to a stored set, if it is live.
    fn resolve(&self, locator: &Locator) -> Option<SetId>;

    /// Set a string metadata entry on a set's storage record.
    fn set_metadata(&mut self, id: SetId, key: &str, value: &str) -> Result<()>;

    /// Read a string metadata entry from a set's storage record.
    fn metadata(&self, id: SetId, key: &str) -> Option<String>;

    /// Durably save all pending mutations.
    fn commit(&mut self) -> Result<()>;
}

// ============================================================================
// Refresh Hook
// ============================================================================

/// Optional post-merge refresh capability.
///
/// After a merge or overwrite rewrites a set's values, the schema's owning
/// system may need to recompute derived state (feature toggles implied by the
/// new values). The host supplies this capability at session construction;
/// when absent it is silently skipped.
pub trait RefreshHook {
    /// Recompute schema-derived state for one freshly merged set.
    fn refresh(&self, set: &mut ParameterSet);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator() {
        let loc = Locator::new("assets/skin.pset");
        assert_eq!(loc.as_str(), "assets/skin.pset");
        assert_eq!(loc.to_string(), "assets/skin.pset");
        assert!(!loc.is_empty());
        assert!(Locator::new("").is_empty());
    }
}
