//! Schemas - the declared property layout of a parameter set.
//!
//! A schema is an ordered sequence of `(name, kind)` pairs, owned by the
//! host's shader system and immutable once built. Parameter sets share their
//! schema through an `Arc`, and every property access goes through the
//! schema's name table.

use std::fmt;
use std::sync::Arc;

/// Kind of a declared property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Single float (sliders, toggles stored as floats).
    Scalar,
    /// Four-component float vector.
    Vector,
    /// RGBA color.
    Color,
    /// Reference to an external asset (texture-like slot).
    Reference,
}

impl PropertyKind {
    /// True for the reference kind, which merge algorithms never touch.
    #[inline]
    pub fn is_reference(self) -> bool {
        matches!(self, PropertyKind::Reference)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyKind::Scalar => "scalar",
            PropertyKind::Vector => "vector",
            PropertyKind::Color => "color",
            PropertyKind::Reference => "reference",
        };
        f.write_str(s)
    }
}

/// Shared handle to an immutable schema.
pub type SchemaRef = Arc<Schema>;

/// Declared property layout: an ordered sequence of `(name, kind)` pairs.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    name: String,
    properties: Vec<(String, PropertyKind)>,
}

impl Schema {
    /// Create an empty schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property declaration. Duplicate names are a caller error;
    /// the first declaration wins on lookup.
    pub fn push(&mut self, name: impl Into<String>, kind: PropertyKind) {
        self.properties.push((name.into(), kind));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, kind: PropertyKind) -> Self {
        self.push(name, kind);
        self
    }

    /// Freeze into a shared handle.
    pub fn into_ref(self) -> SchemaRef {
        Arc::new(self)
    }

    /// Get the schema name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no properties are declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate declarations in schema order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, PropertyKind)> {
        self.properties.iter().map(|(n, k)| (n.as_str(), *k))
    }

    /// Check whether a name is declared.
    pub fn declares(&self, name: &str) -> bool {
        self.properties.iter().any(|(n, _)| n == name)
    }

    /// Get the declared kind of a name.
    pub fn kind_of(&self, name: &str) -> Option<PropertyKind> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, k)| *k)
    }

    /// Get the declaration index of a name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|(n, _)| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declarations() {
        let schema = Schema::new("toon/v2")
            .with("Glow", PropertyKind::Scalar)
            .with("OutlineColor", PropertyKind::Color)
            .with("MainTex", PropertyKind::Reference);

        assert_eq!(schema.name(), "toon/v2");
        assert_eq!(schema.len(), 3);
        assert!(schema.declares("Glow"));
        assert!(!schema.declares("Cutoff"));
        assert_eq!(schema.kind_of("OutlineColor"), Some(PropertyKind::Color));
        assert_eq!(schema.kind_of("Missing"), None);
        assert_eq!(schema.index_of("MainTex"), Some(2));
    }

    #[test]
    fn test_schema_order_preserved() {
        let mut schema = Schema::new("s");
        schema.push("b", PropertyKind::Scalar);
        schema.push("a", PropertyKind::Vector);

        let names: Vec<&str> = schema.properties().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reference_kind() {
        assert!(PropertyKind::Reference.is_reference());
        assert!(!PropertyKind::Color.is_reference());
        assert_eq!(PropertyKind::Vector.to_string(), "vector");
    }
}
