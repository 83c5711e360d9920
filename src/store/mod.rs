//! Asset store implementations.
//!
//! The store contract lives in [`crate::core::AssetStore`]; this module holds
//! the in-memory reference implementation:
//! - [`MemoryStore`] - process-local store with the full store contract

mod memory;

pub use memory::{MemoryStore, COPY_SUFFIX};
