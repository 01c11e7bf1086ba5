//! The font book: both font tables of the active configuration.
//!
//! Fonts are a disjoint namespace from tokens. Registration mutates the
//! active configuration in place behind one lock, so a newly registered face
//! is visible to later lookups without replacing the configuration and
//! without touching the token-view cache.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;
use swatch_tokens::TokenEntry;
use swatch_types::TokenValue;

/// A raw font descriptor as supplied at definition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    /// The family stack, e.g. `"Inter, sans-serif"`.
    pub family: String,
    /// Named face attributes (sizes, weights, line heights).
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, TokenValue>,
}

impl FontFace {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// A parsed font descriptor. The `family` entry doubles as the reverse-lookup
/// value: a face can be found by its registration key or by this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFontFace {
    pub family: TokenEntry,
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, TokenEntry>,
}

impl ParsedFontFace {
    /// The family value used for reverse lookup, when it is a string.
    pub fn family_name(&self) -> Option<&str> {
        self.family.val.as_str()
    }
}

#[derive(Debug, Default, Clone)]
struct FontTables {
    faces: BTreeMap<String, FontFace>,
    parsed: BTreeMap<String, ParsedFontFace>,
}

/// Holds the raw and parsed font tables behind one lock so a registration
/// updates both atomically.
#[derive(Debug, Default)]
pub struct FontBook {
    tables: RwLock<FontTables>,
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a face under `name`, replacing any previous registration.
    pub fn insert(&self, name: impl Into<String>, face: FontFace, parsed: ParsedFontFace) {
        let name = name.into();
        match self.tables.write() {
            Ok(mut tables) => {
                log::debug!("registering font '{}' (family: {})", name, face.family);
                tables.faces.insert(name.clone(), face);
                tables.parsed.insert(name, parsed);
            }
            Err(_) => log::warn!("failed to acquire write lock on font tables"),
        }
    }

    /// Looks up a parsed face by registration key, falling back to a scan for
    /// the first face (in key order) whose family value equals `name`.
    pub fn get(&self, name: &str) -> Option<ParsedFontFace> {
        let tables = match self.tables.read() {
            Ok(tables) => tables,
            Err(_) => {
                log::warn!("failed to acquire read lock on font tables");
                return None;
            }
        };
        if let Some(parsed) = tables.parsed.get(name) {
            return Some(parsed.clone());
        }
        log::trace!("font '{}' not registered by key, scanning family values", name);
        tables
            .parsed
            .values()
            .find(|parsed| parsed.family_name() == Some(name))
            .cloned()
    }

    /// Looks up a raw descriptor by registration key.
    pub fn face(&self, name: &str) -> Option<FontFace> {
        self.tables.read().ok()?.faces.get(name).cloned()
    }

    /// The registration keys, in key order.
    pub fn names(&self) -> Vec<String> {
        self.tables
            .read()
            .map(|tables| tables.parsed.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tables.read().map(|tables| tables.parsed.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for FontBook {
    fn clone(&self) -> Self {
        let tables = self
            .tables
            .read()
            .map(|tables| tables.clone())
            .unwrap_or_default();
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(family: &str) -> ParsedFontFace {
        ParsedFontFace {
            family: TokenEntry::new(family),
            attributes: BTreeMap::new(),
        }
    }

    #[test]
    fn test_insert_and_get_by_key() {
        let book = FontBook::new();
        book.insert("heading", FontFace::new("Inter"), parsed("Inter"));

        let face = book.get("heading").unwrap();
        assert_eq!(face.family_name(), Some("Inter"));
    }

    #[test]
    fn test_get_by_family_value() {
        let book = FontBook::new();
        book.insert("heading", FontFace::new("Inter"), parsed("Inter"));

        // The registration key and the family value both resolve.
        let face = book.get("Inter").unwrap();
        assert_eq!(face, book.get("heading").unwrap());
    }

    #[test]
    fn test_get_missing_is_none() {
        let book = FontBook::new();
        assert!(book.get("nope").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let book = FontBook::new();
        book.insert("body", FontFace::new("Inter"), parsed("Inter"));
        book.insert("body", FontFace::new("Roboto"), parsed("Roboto"));

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("body").unwrap().family_name(), Some("Roboto"));
    }

    #[test]
    fn test_scan_order_is_key_order() {
        let book = FontBook::new();
        book.insert("b", FontFace::new("Same"), parsed("Same"));
        let mut first = parsed("Same");
        first
            .attributes
            .insert("weight".to_string(), TokenEntry::new(700));
        book.insert("a", FontFace::new("Same"), first.clone());

        assert_eq!(book.get("Same").unwrap(), first);
    }

    #[test]
    fn test_clone_is_deep() {
        let book = FontBook::new();
        book.insert("body", FontFace::new("Inter"), parsed("Inter"));

        let copy = book.clone();
        copy.insert("extra", FontFace::new("Mono"), parsed("Mono"));

        assert_eq!(book.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
