//! Newtype wrapper for CSS custom-property identities.
//!
//! A `Variable` ties a token entry to the custom property generated for it at
//! configuration-build time, so web targets can resolve a token to a live
//! `var(--…)` reference instead of a baked literal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The custom-property identity of a parsed token entry.
///
/// Stores the property name without the `--` sigil; rendering is explicit via
/// [`Variable::reference`] or [`Variable::property`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    /// Creates a new variable from a bare property name (no leading `--`).
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the bare property name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the declared property, e.g. `--space-md`.
    pub fn property(&self) -> String {
        format!("--{}", self.0)
    }

    /// Returns the value-position reference, e.g. `var(--space-md)`.
    pub fn reference(&self) -> String {
        format!("var(--{})", self.0)
    }
}

impl From<String> for Variable {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_rendering() {
        let var = Variable::new("space-md");
        assert_eq!(var.property(), "--space-md");
    }

    #[test]
    fn test_reference_rendering() {
        let var = Variable::new("color-red");
        assert_eq!(var.reference(), "var(--color-red)");
        assert_eq!(var.to_string(), "var(--color-red)");
    }

    #[test]
    fn test_serde_transparent() {
        let var: Variable = serde_json::from_str("\"radius-sm\"").unwrap();
        assert_eq!(var.name(), "radius-sm");
        assert_eq!(serde_json::to_string(&var).unwrap(), "\"radius-sm\"");
    }
}
