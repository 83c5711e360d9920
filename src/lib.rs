//! # matmerge
//!
//! Working-copy management and selective parameter merging for scene-graph
//! materials.
//!
//! The crate manages parameter sets (typed property bundles conforming to a
//! named schema) referenced by the slots of scene-graph nodes, and provides
//! four operations on them:
//!
//! 1. **Derive** - clone each selected set into a tagged working copy and
//!    re-point the scene at the copies
//! 2. **Merge** - propagate a master set's intentionally authored values
//!    into each working copy, leaving defaults and references alone
//! 3. **Overwrite** - rewrite each working copy from the master,
//!    references excepted
//! 4. **Restore** - re-point the scene at the originals and delete the
//!    copies
//!
//! Lineage from a copy back to its original travels as metadata on the
//! copy's own store record, so it survives rescans and restarts.
//!
//! ## Modules
//!
//! - [`util`] - Errors, math re-exports, color sentinels
//! - [`core`] - Schemas, values, parameter sets, collaborator traits
//! - [`store`] - In-memory asset store implementation
//! - [`scene`] - Scene nodes and reference rewriting
//! - [`lineage`] - Derived-copy tagging and origin resolution
//! - [`merge`] - Selective-merge and force-overwrite algorithms
//! - [`session`] - Session controller over the four operations
//!
//! ## Example
//!
//! ```ignore
//! use matmerge::prelude::*;
//!
//! let mut session = Session::new();
//! session.rescan(&store, &nodes);
//! session.derive(&mut store, &mut nodes);
//! session.merge(&mut store, master);
//! session.restore(&mut store, &mut nodes);
//! ```

pub mod core;
pub mod lineage;
pub mod merge;
pub mod scene;
pub mod session;
pub mod store;
pub mod util;

// Re-export commonly used types
pub use util::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AssetStore, Locator, MetaData, ParameterSet, PropertyKind, PropertyValue, RefreshHook,
        Role, Schema, SchemaRef, SetId,
    };
    pub use crate::merge::{merge_into, overwrite_into, MergeConfig, MergeStats};
    pub use crate::scene::{redirect, referenced_sets, SceneNode};
    pub use crate::session::{DeriveSummary, MergeSummary, RestoreSummary, Selection, Session};
    pub use crate::store::MemoryStore;
    pub use crate::util::{Error, Result};
}
