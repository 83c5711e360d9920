//! Error types for the matmerge library.

use crate::core::SetId;
use thiserror::Error;

/// Main error type for parameter-set operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter set does not exist in the asset store
    #[error("Parameter set not found: {0}")]
    SetNotFound(SetId),

    /// Property not declared by the set's schema
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// A derived copy's origin metadata is missing or dangling
    #[error("Unresolvable lineage for '{name}' (locator: '{locator}')")]
    UnresolvableLineage { name: String, locator: String },

    /// Asset store backend failure
    #[error("Store operation failed: {0}")]
    StoreFailed(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for parameter-set operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::PropertyNotFound("Glow".to_string());
        assert!(e.to_string().contains("Glow"));

        let e = Error::UnresolvableLineage {
            name: "skin_copy".to_string(),
            locator: "assets/skin.pset".to_string(),
        };
        assert!(e.to_string().contains("skin_copy"));
        assert!(e.to_string().contains("assets/skin.pset"));
    }
}
