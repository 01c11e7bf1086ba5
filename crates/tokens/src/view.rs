//! The three merged views of the token namespace.
//!
//! All three views are computed in one pass over the configuration tables and
//! shared behind `Arc`s, so downstream consumers that memoize on identity see
//! a stable object between invalidations.

use crate::entry::{TokenMap, TokenTable};
use std::sync::Arc;

/// Selects one of the three cached views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenView {
    /// Bare keys; generic raw entries enriched by their parsed counterparts,
    /// overlaid by specific overrides. The resolver reads this view.
    Merged,
    /// Sigil keys; parsed generic entries overlaid by specific overrides.
    Prefixed,
    /// Bare keys; raw generic entries overlaid by specific overrides.
    Unprefixed,
}

/// The computed views. Each map is independently shareable.
#[derive(Debug, Clone)]
pub struct MergedViews {
    pub merged: Arc<TokenMap>,
    pub prefixed: Arc<TokenMap>,
    pub unprefixed: Arc<TokenMap>,
}

impl MergedViews {
    /// Returns the requested view by shared reference.
    pub fn select(&self, view: TokenView) -> Arc<TokenMap> {
        match view {
            TokenView::Merged => Arc::clone(&self.merged),
            TokenView::Prefixed => Arc::clone(&self.prefixed),
            TokenView::Unprefixed => Arc::clone(&self.unprefixed),
        }
    }
}

/// Computes all three views from the configuration tables.
///
/// Precedence within the merged view, lowest to highest: generic raw, generic
/// parsed, specific. Keys present only in the parsed table surface in the
/// prefixed view but not in the merged view, which is keyed by the raw
/// table's namespace.
pub fn compute_views(
    tokens: &TokenTable,
    tokens_parsed: &TokenTable,
    specific_tokens: &TokenTable,
) -> MergedViews {
    let mut merged = TokenMap::with_capacity(tokens.len() + specific_tokens.len());
    for (key, raw) in tokens {
        let entry = match tokens_parsed.get(key) {
            Some(parsed) => raw.enriched_by(parsed),
            None => raw.clone(),
        };
        merged.insert(key.bare().to_string(), entry);
    }
    for (key, entry) in specific_tokens {
        merged.insert(key.bare().to_string(), entry.clone());
    }

    let mut prefixed = TokenMap::with_capacity(tokens_parsed.len() + specific_tokens.len());
    for (key, entry) in tokens_parsed {
        prefixed.insert(key.prefixed(), entry.clone());
    }
    for (key, entry) in specific_tokens {
        prefixed.insert(key.prefixed(), entry.clone());
    }

    let mut unprefixed = TokenMap::with_capacity(tokens.len() + specific_tokens.len());
    for (key, entry) in tokens {
        unprefixed.insert(key.bare().to_string(), entry.clone());
    }
    for (key, entry) in specific_tokens {
        unprefixed.insert(key.bare().to_string(), entry.clone());
    }

    MergedViews {
        merged: Arc::new(merged),
        prefixed: Arc::new(prefixed),
        unprefixed: Arc::new(unprefixed),
    }
}
