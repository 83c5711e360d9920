//! Clone lineage - the durable link from a working copy back to its original.
//!
//! Lineage is stored on the copy itself: the [`Role::Derived`] marker on the
//! set record plus one metadata entry holding the original's locator. Nothing
//! in memory is authoritative; every query re-reads the stored record, so
//! lineage survives rescans and process restarts.

use crate::core::{AssetStore, Locator, Role, SetId};
use crate::util::{Error, Result};

/// Metadata key under which a derived copy stores its original's locator.
pub const ORIGIN_KEY: &str = "origin_locator";

/// Mark a freshly created copy as derived and record its original's locator.
pub fn tag(store: &mut impl AssetStore, copy: SetId, origin: &Locator) -> Result<()> {
    let set = store.get_mut(copy).ok_or(Error::SetNotFound(copy))?;
    set.set_role(Role::Derived);
    store.set_metadata(copy, ORIGIN_KEY, origin.as_str())
}

/// Check whether a stored set carries the derived marker.
pub fn is_derived(store: &impl AssetStore, id: SetId) -> bool {
    store
        .get(id)
        .map(|set| set.role() == Role::Derived)
        .unwrap_or(false)
}

/// Resolve a derived copy's original through its stored locator.
///
/// Returns `None` when the metadata entry is absent, empty, or no longer
/// resolves to a live set.
pub fn resolve_original(store: &impl AssetStore, id: SetId) -> Option<SetId> {
    let locator = store.metadata(id, ORIGIN_KEY)?;
    if locator.is_empty() {
        return None;
    }
    store.resolve(&Locator::new(locator))
}
