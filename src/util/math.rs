//! Math type re-exports and merge-domain sentinel values.
//!
//! This module re-exports the vector types from `glam` used for vector and
//! color property values, plus the two canonical "unset" color sentinels of
//! the source domain.

// Re-export glam types
pub use glam::{Vec2, Vec3, Vec4};

/// Opaque white, the canonical unset color of a fresh parameter set.
pub const OPAQUE_WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Fully transparent black, the other unset-color sentinel.
pub const TRANSPARENT_BLACK: Vec4 = Vec4::ZERO;
