//! Token resolution against the merged view.

use crate::error::ConfigError;
use crate::runtime::store::StyleRuntime;
use swatch_tokens::{TokenEntry, TokenKey, TokenView};
use swatch_types::TokenValue;

impl StyleRuntime {
    /// Resolves `reference` to its platform-appropriate value: on a
    /// variable-capable target an entry with a binding yields the `var(--…)`
    /// reference, otherwise the literal value. Either reference spelling is
    /// accepted.
    pub fn token(&self, reference: &str) -> Result<TokenValue, ConfigError> {
        let entry = self.lookup(reference)?;
        if self.platform().supports_variables() {
            if let Some(variable) = &entry.variable {
                return Ok(TokenValue::Str(variable.reference()));
            }
        }
        Ok(entry.val)
    }

    /// Resolves `reference` to its literal value regardless of platform, for
    /// call sites that bake a value into a computed result and must not pick
    /// up a live variable binding.
    pub fn token_value(&self, reference: &str) -> Result<TokenValue, ConfigError> {
        Ok(self.lookup(reference)?.val)
    }

    fn lookup(&self, reference: &str) -> Result<TokenEntry, ConfigError> {
        let key = TokenKey::parse(reference)?;
        let merged = self.tokens(TokenView::Merged)?;
        merged
            .get(key.bare())
            .cloned()
            .ok_or_else(|| ConfigError::TokenNotFound(key.bare().to_string()))
    }
}
