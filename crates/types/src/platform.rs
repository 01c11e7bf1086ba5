use serde::{Deserialize, Serialize};

/// An enum to select the rendering target a runtime resolves tokens for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Web rendering; token entries may resolve to `var(--…)` references.
    Web,
    #[default]
    /// Native rendering; tokens always resolve to literal values.
    Native,
}

impl Platform {
    /// Whether this target supports CSS-like variable indirection.
    pub fn supports_variables(&self) -> bool {
        matches!(self, Platform::Web)
    }
}
