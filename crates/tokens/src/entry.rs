use crate::key::TokenKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swatch_types::{TokenValue, Variable};

/// A resolved token record: the literal value plus, on variable-capable
/// targets, the custom property it was published under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub val: TokenValue,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<Variable>,
}

impl TokenEntry {
    /// A raw entry with no variable binding.
    pub fn new(val: impl Into<TokenValue>) -> Self {
        Self {
            val: val.into(),
            variable: None,
        }
    }

    /// A parsed entry carrying its custom-property identity.
    pub fn with_variable(val: impl Into<TokenValue>, variable: Variable) -> Self {
        Self {
            val: val.into(),
            variable: Some(variable),
        }
    }

    /// Combines a raw entry with its parsed counterpart. The parsed side wins
    /// field-wise; the raw side only fills a missing variable binding.
    pub fn enriched_by(&self, parsed: &TokenEntry) -> TokenEntry {
        TokenEntry {
            val: parsed.val.clone(),
            variable: parsed.variable.clone().or_else(|| self.variable.clone()),
        }
    }
}

/// A typed configuration table, keyed canonically.
pub type TokenTable = HashMap<TokenKey, TokenEntry>;

/// A rendered export view; key spelling depends on the view.
pub type TokenMap = HashMap<String, TokenEntry>;
