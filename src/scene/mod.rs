//! Scene nodes and reference rewriting.
//!
//! A node owns an ordered sequence of slots, each referencing one parameter
//! set or nothing. The host discovers and supplies the node list; this module
//! only reads and rewrites the references:
//! - [`SceneNode`] - node with its reference slots
//! - [`redirect`] - substitute references according to a mapping
//! - [`referenced_sets`] - distinct referenced sets in first-appearance order

use std::collections::{HashMap, HashSet};

use crate::core::SetId;

/// A scene-graph node with its ordered parameter-set reference slots.
#[derive(Clone, Debug)]
pub struct SceneNode {
    name: String,
    slots: Vec<Option<SetId>>,
}

impl SceneNode {
    /// Create a node with no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    /// Create a node with the given slots.
    pub fn with_slots(name: impl Into<String>, slots: Vec<Option<SetId>>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// Get the node name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a reference slot.
    pub fn add_slot(&mut self, set: Option<SetId>) {
        self.slots.push(set);
    }

    /// The reference slots in order.
    #[inline]
    pub fn slots(&self) -> &[Option<SetId>] {
        &self.slots
    }

    /// The reference slots, mutable.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [Option<SetId>] {
        &mut self.slots
    }
}

/// Substitute parameter-set references across all slots of all nodes.
///
/// Every slot whose current reference is a key in `mapping` is replaced with
/// the mapped value. Returns the number of slots rewritten. The mapping is a
/// pure function of the old reference, so slots sharing an original all end
/// up on the same replacement regardless of traversal order.
pub fn redirect(nodes: &mut [SceneNode], mapping: &HashMap<SetId, SetId>) -> usize {
    let mut count = 0;
    for node in nodes {
        for slot in node.slots_mut() {
            if let Some(current) = slot {
                if let Some(&replacement) = mapping.get(current) {
                    *slot = Some(replacement);
                    count += 1;
                }
            }
        }
    }
    count
}

/// Collect the distinct non-null referenced sets, in first-appearance order.
pub fn referenced_sets(nodes: &[SceneNode]) -> Vec<SetId> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for node in nodes {
        for slot in node.slots() {
            if let Some(id) = slot {
                if seen.insert(*id) {
                    out.push(*id);
                }
            }
        }
    }
    out
}
