//! Parameter sets - named bundles of typed properties conforming to a schema.

use std::fmt;

use crate::core::{PropertyValue, SchemaRef};
use crate::util::{Error, Result};

/// Stable identity of a stored parameter set, issued by the asset store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(u64);

impl SetId {
    /// Construct from a raw id. Only asset-store implementations mint these.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set#{}", self.0)
    }
}

/// Lifecycle role of a parameter set, set at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// An ordinary authored set.
    #[default]
    Original,
    /// A working copy derived from an original.
    Derived,
}

/// A named bundle of typed property values conforming to a schema.
///
/// Invariant: the value table holds exactly one value per declared property,
/// in schema order. Values are created from kind defaults and only ever
/// addressed by name through the schema.
#[derive(Clone, Debug)]
pub struct ParameterSet {
    name: String,
    schema: SchemaRef,
    values: Vec<PropertyValue>,
    role: Role,
}

impl ParameterSet {
    /// Create a set with default values for every declared property.
    pub fn new(name: impl Into<String>, schema: SchemaRef) -> Self {
        let values = schema
            .properties()
            .map(|(_, kind)| PropertyValue::default_for(kind))
            .collect();
        Self {
            name: name.into(),
            schema,
            values,
            role: Role::Original,
        }
    }

    /// Get the set name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the set.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the schema handle.
    #[inline]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Get the lifecycle role.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Set the lifecycle role.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Get a property value by name. `None` if the schema does not declare it.
    pub fn value(&self, name: &str) -> Option<&PropertyValue> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    /// Set a property value by name.
    ///
    /// The name check against the schema is authoritative; the value's
    /// variant is stored as given, even if it differs from the declared kind.
    pub fn set_value(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match self.schema.index_of(name) {
            Some(i) => {
                self.values[i] = value;
                Ok(())
            }
            None => Err(Error::PropertyNotFound(name.to_string())),
        }
    }

    /// Iterate `(name, value)` pairs in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.schema
            .properties()
            .map(|(n, _)| n)
            .zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PropertyKind, Schema};
    use crate::util::{Vec4, OPAQUE_WHITE};

    fn toon_schema() -> SchemaRef {
        Schema::new("toon/v2")
            .with("Glow", PropertyKind::Scalar)
            .with("OutlineColor", PropertyKind::Color)
            .with("MainTex", PropertyKind::Reference)
            .into_ref()
    }

    #[test]
    fn test_new_set_has_defaults() {
        let set = ParameterSet::new("skin", toon_schema());

        assert_eq!(set.name(), "skin");
        assert_eq!(set.role(), Role::Original);
        assert_eq!(set.value("Glow"), Some(&PropertyValue::Scalar(0.0)));
        assert_eq!(
            set.value("OutlineColor"),
            Some(&PropertyValue::Color(OPAQUE_WHITE))
        );
        assert_eq!(set.value("MainTex"), Some(&PropertyValue::Reference(None)));
        assert_eq!(set.value("Cutoff"), None);
        assert_eq!(set.values().count(), 3);
    }

    #[test]
    fn test_set_value_by_name() {
        let mut set = ParameterSet::new("skin", toon_schema());

        set.set_value("Glow", PropertyValue::Scalar(0.8)).unwrap();
        assert_eq!(set.value("Glow"), Some(&PropertyValue::Scalar(0.8)));

        set.set_value("OutlineColor", PropertyValue::Color(Vec4::new(0.2, 0.0, 0.0, 1.0)))
            .unwrap();
        assert_eq!(
            set.value("OutlineColor").unwrap().as_color(),
            Some(Vec4::new(0.2, 0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn test_set_value_undeclared_fails() {
        let mut set = ParameterSet::new("skin", toon_schema());
        let err = set.set_value("Cutoff", PropertyValue::Scalar(1.0));
        assert!(matches!(err, Err(Error::PropertyNotFound(_))));
    }

    #[test]
    fn test_set_id_display() {
        let id = SetId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "set#42");
    }
}
