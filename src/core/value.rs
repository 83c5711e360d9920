//! Typed property values.
//!
//! One enum variant per declared [`PropertyKind`], with glam vectors for the
//! vector and color kinds. A value's variant normally matches its schema
//! declaration, but the store does not enforce that: when two schemas declare
//! the same name with different kinds, a merge writes the master's variant
//! verbatim, matching the source domain's name-keyed property tables.

use crate::core::PropertyKind;
use crate::util::{Vec4, OPAQUE_WHITE};

/// A single typed property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Single float value.
    Scalar(f32),
    /// Four-component vector value.
    Vector(Vec4),
    /// RGBA color value.
    Color(Vec4),
    /// Opaque external-asset reference (e.g. a texture path), or empty.
    Reference(Option<String>),
}

impl PropertyValue {
    /// The kind this variant corresponds to.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Scalar(_) => PropertyKind::Scalar,
            PropertyValue::Vector(_) => PropertyKind::Vector,
            PropertyValue::Color(_) => PropertyKind::Color,
            PropertyValue::Reference(_) => PropertyKind::Reference,
        }
    }

    /// The unset value a fresh parameter set holds for a declared kind:
    /// zero scalar, zero vector, opaque white color, empty reference.
    pub fn default_for(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Scalar => PropertyValue::Scalar(0.0),
            PropertyKind::Vector => PropertyValue::Vector(Vec4::ZERO),
            PropertyKind::Color => PropertyValue::Color(OPAQUE_WHITE),
            PropertyKind::Reference => PropertyValue::Reference(None),
        }
    }

    /// Get as float if this is a scalar.
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            PropertyValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as vector if this is a vector.
    pub fn as_vector(&self) -> Option<Vec4> {
        match self {
            PropertyValue::Vector(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as color if this is a color.
    pub fn as_color(&self) -> Option<Vec4> {
        match self {
            PropertyValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the reference locator if this is a non-empty reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            PropertyValue::Reference(r) => r.as_deref(),
            _ => None,
        }
    }
}
