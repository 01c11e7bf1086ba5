//! The active styling configuration and its typed patch operations.

mod builder;
mod fonts;

pub use builder::{ConfigDefinition, ConfigurationBuilder};
pub use fonts::{FontBook, FontFace, ParsedFontFace};

use std::collections::HashMap;
use std::sync::Arc;
use swatch_tokens::TokenTable;
use swatch_types::{Platform, TokenValue};

/// A style-value mapping for one theme.
pub type Theme = HashMap<String, TokenValue>;

/// All named themes of a configuration.
pub type ThemeTable = HashMap<String, Theme>;

/// One complete styling configuration.
///
/// Exactly one configuration is active per [`StyleRuntime`](crate::StyleRuntime)
/// at any time; replacing it is an atomic swap. The token tables and themes
/// are immutable once installed; only the font book accepts in-place
/// registration, which is why it carries its own lock.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Generic tokens, canonically keyed, raw values.
    pub tokens: TokenTable,
    /// Generic tokens enriched at build time (variable bindings on web).
    pub tokens_parsed: TokenTable,
    /// Category-qualified overrides; take precedence over generic tokens of
    /// the same base name in every view.
    pub specific_tokens: TokenTable,
    /// Theme name to style-value mapping.
    pub themes: Arc<ThemeTable>,
    /// Raw and parsed font tables.
    pub fonts: FontBook,
}

impl Configuration {
    /// Starts a builder targeting `platform`.
    pub fn builder(platform: Platform) -> ConfigurationBuilder {
        ConfigurationBuilder::new(platform)
    }

    /// Returns a copy with `patch` merged in. The active configuration is
    /// never mutated in place; the runtime swaps the result in atomically.
    pub(crate) fn merged_with(&self, patch: ConfigPatch) -> Configuration {
        let mut next = self.clone();
        match patch {
            ConfigPatch::Tokens(table) => next.tokens.extend(table),
            ConfigPatch::TokensParsed(table) => next.tokens_parsed.extend(table),
            ConfigPatch::SpecificTokens(table) => next.specific_tokens.extend(table),
            ConfigPatch::Themes(themes) => {
                let mut merged = (*next.themes).clone();
                merged.extend(themes);
                next.themes = Arc::new(merged);
            }
        }
        next
    }
}

/// An explicit per-category patch.
///
/// Replaces generic merge-by-string-key: each variant names the table it
/// shallow-merges, and the runtime knows which variants require the token
/// views to be recomputed.
#[derive(Debug, Clone)]
pub enum ConfigPatch {
    Tokens(TokenTable),
    TokensParsed(TokenTable),
    SpecificTokens(TokenTable),
    Themes(ThemeTable),
}

impl ConfigPatch {
    /// Whether applying this patch changes any of the three token views.
    pub(crate) fn affects_token_views(&self) -> bool {
        !matches!(self, ConfigPatch::Themes(_))
    }
}
