//! Session controller - orchestrates the four top-level operations.
//!
//! A [`Session`] owns the transient state of one editing session: the
//! [`Selection`] over scanned parameter sets, the [`SessionLog`], the
//! [`MergeConfig`], and the optional refresh hook. The durable collaborators
//! (asset store, scene nodes) are borrowed per operation, so every operation
//! reads fresh state, runs to completion, and commits once at its end.
//!
//! No operation aborts on a per-item failure: items that cannot be processed
//! are logged and skipped, and every operation returns a count summary.

mod log;
mod selection;

pub use log::SessionLog;
pub use selection::{Selection, SelectionEntry};

use std::collections::HashMap;

use crate::core::{AssetStore, RefreshHook, Role, SetId};
use crate::lineage;
use crate::merge::{merge_into, overwrite_into, MergeConfig, MergeStats};
use crate::scene::{self, SceneNode};
use crate::util::Error;

/// Outcome of a derive/backup run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeriveSummary {
    /// Working copies created.
    pub created: usize,
    /// Slots redirected to the new copies.
    pub redirected: usize,
}

/// Outcome of a merge or overwrite run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Working copies processed.
    pub targets: usize,
    /// Aggregate property counts across all targets.
    pub stats: MergeStats,
}

/// Outcome of a restore run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Slots pointed back at their originals.
    pub restored_slots: usize,
    /// Working copies deleted.
    pub deleted: usize,
    /// Working copies left in place because their origin did not resolve.
    pub unresolved: usize,
}

#[derive(Clone, Copy)]
enum MergeMode {
    Selective,
    Force,
}

/// One editing session over a host-owned store and scene.
#[derive(Default)]
pub struct Session {
    selection: Selection,
    log: SessionLog,
    config: MergeConfig,
    refresh: Option<Box<dyn RefreshHook>>,
}

impl Session {
    /// Create a session with default config and no refresh hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a host-supplied refresh hook.
    pub fn with_refresh(hook: Box<dyn RefreshHook>) -> Self {
        Self {
            refresh: Some(hook),
            ..Self::default()
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The current selection, mutable (toggle inclusion between operations).
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// The operation log.
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// The operation log, mutable (e.g. to clear it).
    pub fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }

    /// The merge configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// The merge configuration, mutable.
    pub fn config_mut(&mut self) -> &mut MergeConfig {
        &mut self.config
    }

    /// Rebuild the selection from the scene's current references.
    ///
    /// Keeps the distinct live referenced sets in first-appearance order,
    /// all included. Always allowed; idempotent without intervening edits.
    pub fn rescan(&mut self, store: &impl AssetStore, nodes: &[SceneNode]) {
        let live = scene::referenced_sets(nodes)
            .into_iter()
            .filter(|id| store.get(*id).is_some());
        self.selection.rebuild(live);
        self.log
            .record(format!("Found {} parameter sets.", self.selection.len()));
    }

    /// Derive/backup: clone each selected original and re-point the scene.
    ///
    /// For each selected non-derived set: create a store copy, tag it with
    /// the original's locator, then redirect every slot referencing an
    /// original to its copy in one pass. Commits once, then rescans.
    pub fn derive(
        &mut self,
        store: &mut impl AssetStore,
        nodes: &mut [SceneNode],
    ) -> DeriveSummary {
        let originals: Vec<SetId> = self
            .selection
            .included()
            .filter(|id| store.get(*id).is_some_and(|s| s.role() == Role::Original))
            .collect();

        if originals.is_empty() {
            self.log.record("Nothing to back up.");
            return DeriveSummary::default();
        }

        let mut mapping = HashMap::new();
        for id in originals {
            let Some(origin) = store.locate(id) else {
                self.log.record(format!("No locator for {id}, skipping."));
                continue;
            };
            let copy = match store.create_copy(id) {
                Ok(copy) => copy,
                Err(e) => {
                    self.log.record(format!("Copy failed for {id}: {e}"));
                    continue;
                }
            };
            if let Err(e) = lineage::tag(store, copy, &origin) {
                self.log.record(format!("Tag failed for {copy}: {e}"));
                continue;
            }
            mapping.insert(id, copy);
        }

        let redirected = scene::redirect(nodes, &mapping);
        if let Err(e) = store.commit() {
            self.log.record(format!("Commit failed: {e}"));
        }

        self.log
            .record(format!("Cloned {} parameter sets.", mapping.len()));
        self.log
            .record(format!("Redirected {redirected} slots to working copies."));
        self.rescan(store, nodes);

        DeriveSummary {
            created: mapping.len(),
            redirected,
        }
    }

    /// Selective merge: propagate the master's authored values into each
    /// selected working copy.
    pub fn merge(&mut self, store: &mut impl AssetStore, master: SetId) -> MergeSummary {
        self.apply(store, master, MergeMode::Selective)
    }

    /// Force overwrite: rewrite each selected working copy from the master,
    /// references excepted.
    pub fn overwrite(&mut self, store: &mut impl AssetStore, master: SetId) -> MergeSummary {
        self.apply(store, master, MergeMode::Force)
    }

    fn apply(
        &mut self,
        store: &mut impl AssetStore,
        master: SetId,
        mode: MergeMode,
    ) -> MergeSummary {
        let Some(master_set) = store.get(master) else {
            self.log
                .record(format!("Master parameter set not found: {master}"));
            return MergeSummary::default();
        };
        let snapshot = master_set.clone();

        let targets: Vec<SetId> = self
            .selection
            .included()
            .filter(|id| lineage::is_derived(store, *id))
            .collect();

        if targets.is_empty() {
            self.log.record(match mode {
                MergeMode::Selective => "No working copy selected for merge.",
                MergeMode::Force => "No working copy selected for overwrite.",
            });
            return MergeSummary::default();
        }

        let mut stats = MergeStats::default();
        let mut touched = 0;
        for id in targets {
            let Some(dest) = store.get_mut(id) else {
                self.log.record(format!("Working copy vanished: {id}"));
                continue;
            };
            let run = match mode {
                MergeMode::Selective => merge_into(&snapshot, dest, &self.config),
                MergeMode::Force => overwrite_into(&snapshot, dest, &self.config),
            };
            if let Some(hook) = &self.refresh {
                hook.refresh(dest);
            }
            stats.absorb(run);
            touched += 1;
        }

        if let Err(e) = store.commit() {
            self.log.record(format!("Commit failed: {e}"));
        }

        self.log.record(match mode {
            MergeMode::Selective => format!(
                "Merged parameters into {touched} working copies ({} properties).",
                stats.copied
            ),
            MergeMode::Force => format!(
                "Overwrote {touched} working copies (references kept, {} properties).",
                stats.copied
            ),
        });

        MergeSummary {
            targets: touched,
            stats,
        }
    }

    /// Restore: re-point the scene at the originals and delete the copies.
    ///
    /// Candidates are all derived copies among the scene's current
    /// references; the selection is ignored. Copies whose origin locator
    /// does not resolve are logged and left in place. Commits once, then
    /// rescans.
    pub fn restore(
        &mut self,
        store: &mut impl AssetStore,
        nodes: &mut [SceneNode],
    ) -> RestoreSummary {
        let copies: Vec<SetId> = scene::referenced_sets(nodes)
            .into_iter()
            .filter(|id| lineage::is_derived(store, *id))
            .collect();

        if copies.is_empty() {
            self.log.record("No working copies found, nothing to restore.");
            return RestoreSummary::default();
        }

        let mut mapping = HashMap::new();
        let mut unresolved = 0;
        for copy in copies {
            match lineage::resolve_original(store, copy) {
                Some(original) => {
                    mapping.insert(copy, original);
                }
                None => {
                    unresolved += 1;
                    let name = store
                        .get(copy)
                        .map(|s| s.name().to_string())
                        .unwrap_or_else(|| copy.to_string());
                    let locator = store
                        .metadata(copy, lineage::ORIGIN_KEY)
                        .unwrap_or_default();
                    let err = Error::UnresolvableLineage { name, locator };
                    self.log.record(format!("Skipping restore: {err}"));
                }
            }
        }

        if mapping.is_empty() {
            self.log
                .record("No origin locators resolved; nothing restored.");
            return RestoreSummary {
                unresolved,
                ..Default::default()
            };
        }

        let restored_slots = scene::redirect(nodes, &mapping);

        let mut deleted = 0;
        for copy in mapping.keys() {
            match store.delete(*copy) {
                Ok(()) => deleted += 1,
                Err(e) => self.log.record(format!("Delete failed for {copy}: {e}")),
            }
        }

        if let Err(e) = store.commit() {
            self.log.record(format!("Commit failed: {e}"));
        }

        self.log.record(format!(
            "Restored {restored_slots} slots and deleted {deleted} working copies."
        ));
        self.rescan(store, nodes);

        RestoreSummary {
            restored_slots,
            deleted,
            unresolved,
        }
    }
}
