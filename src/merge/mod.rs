//! Merge engine - selective merge and force overwrite between parameter sets.
//!
//! Both algorithms walk the **master's** schema in declaration order and copy
//! values into the destination by name. Reference-kind properties are never
//! touched, so visual assets attached to a working copy stay intact no matter
//! what the master carries:
//! - [`merge_into`] - copy only intentionally authored (non-default) values
//! - [`overwrite_into`] - copy every compatible non-reference value
//! - [`MergeConfig`] - skip/force-include lists and non-default thresholds
//! - [`MergeStats`] - per-run property counts

use std::collections::HashSet;

use crate::core::{ParameterSet, PropertyValue};
use crate::util::{OPAQUE_WHITE, TRANSPARENT_BLACK};

/// Tunables for the merge algorithms.
///
/// The thresholds are domain heuristics carried over verbatim from the source
/// shader family; they are configuration, not derivable invariants.
#[derive(Clone, Debug)]
pub struct MergeConfig {
    /// Names always copied, regardless of the non-default test or skip list.
    pub force_include: HashSet<String>,
    /// Names never copied (unless force-included).
    pub skip: HashSet<String>,
    /// A scalar is authored when its absolute value exceeds this.
    pub scalar_epsilon: f32,
    /// A vector is authored when its squared magnitude exceeds this.
    pub vector_epsilon_sq: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            force_include: HashSet::new(),
            skip: HashSet::new(),
            scalar_epsilon: 1e-4,
            vector_epsilon_sq: 1e-6,
        }
    }
}

/// Property counts from one merge or overwrite run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Values copied into the destination.
    pub copied: usize,
    /// Master values judged default and left alone (selective merge only).
    pub skipped_default: usize,
    /// Names the destination's schema does not declare.
    pub skipped_undeclared: usize,
    /// Reference-kind properties, excluded unconditionally.
    pub skipped_reference: usize,
    /// Names excluded by the skip list.
    pub skipped_listed: usize,
}

impl MergeStats {
    /// Total properties visited.
    pub fn total(&self) -> usize {
        self.copied
            + self.skipped_default
            + self.skipped_undeclared
            + self.skipped_reference
            + self.skipped_listed
    }

    /// Accumulate another run's counts into this one.
    pub fn absorb(&mut self, other: MergeStats) {
        self.copied += other.copied;
        self.skipped_default += other.skipped_default;
        self.skipped_undeclared += other.skipped_undeclared;
        self.skipped_reference += other.skipped_reference;
        self.skipped_listed += other.skipped_listed;
    }
}

/// Selective merge: copy master values the author intentionally set.
///
/// A value propagates only when its name is force-included or the value is
/// non-default per the kind-specific test, so a master with most sliders at
/// shader defaults does not stomp the destination.
pub fn merge_into(master: &ParameterSet, dest: &mut ParameterSet, cfg: &MergeConfig) -> MergeStats {
    copy_properties(master, dest, cfg, false)
}

/// Force overwrite: copy every compatible non-reference value unconditionally.
pub fn overwrite_into(
    master: &ParameterSet,
    dest: &mut ParameterSet,
    cfg: &MergeConfig,
) -> MergeStats {
    copy_properties(master, dest, cfg, true)
}

fn copy_properties(
    master: &ParameterSet,
    dest: &mut ParameterSet,
    cfg: &MergeConfig,
    unconditional: bool,
) -> MergeStats {
    let mut stats = MergeStats::default();

    for (name, kind) in master.schema().properties() {
        let forced = cfg.force_include.contains(name);
        if cfg.skip.contains(name) && !forced {
            stats.skipped_listed += 1;
            continue;
        }
        if !dest.schema().declares(name) {
            stats.skipped_undeclared += 1;
            continue;
        }
        if kind.is_reference() {
            stats.skipped_reference += 1;
            continue;
        }
        // Invariant: master holds a value for every declared name.
        let Some(value) = master.value(name) else {
            continue;
        };
        if unconditional || forced || is_authored(value, cfg) {
            match dest.set_value(name, value.clone()) {
                Ok(()) => stats.copied += 1,
                Err(_) => stats.skipped_undeclared += 1,
            }
        } else {
            stats.skipped_default += 1;
        }
    }

    stats
}

/// Kind-specific non-default test: does this value look intentionally set?
fn is_authored(value: &PropertyValue, cfg: &MergeConfig) -> bool {
    match value {
        PropertyValue::Scalar(v) => v.abs() > cfg.scalar_epsilon,
        PropertyValue::Vector(v) => v.length_squared() > cfg.vector_epsilon_sq,
        PropertyValue::Color(c) => *c != OPAQUE_WHITE && *c != TRANSPARENT_BLACK,
        PropertyValue::Reference(_) => false,
    }
}
