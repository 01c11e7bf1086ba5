//! Assembles a [`Configuration`] from design-time definitions.
//!
//! The builder owns the one piece of derivation this store performs: filling
//! the parsed token table next to the raw one, minting variable bindings when
//! the target platform supports variable indirection. Token *values* arrive
//! already computed; nothing here evaluates design-time expressions.

use crate::config::fonts::{FontBook, FontFace, ParsedFontFace};
use crate::config::{Configuration, Theme, ThemeTable};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use swatch_tokens::{TokenEntry, TokenKey, TokenTable};
use swatch_types::{Platform, TokenValue, Variable};

/// A builder for creating a [`Configuration`].
pub struct ConfigurationBuilder {
    platform: Platform,
    tokens: TokenTable,
    tokens_parsed: TokenTable,
    specific_tokens: TokenTable,
    themes: ThemeTable,
    fonts: FontBook,
}

impl ConfigurationBuilder {
    /// Creates an empty builder targeting `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            tokens: TokenTable::new(),
            tokens_parsed: TokenTable::new(),
            specific_tokens: TokenTable::new(),
            themes: ThemeTable::new(),
            fonts: FontBook::new(),
        }
    }

    /// Adds one category of generic tokens (`space`, `color`, …). Each value
    /// lands in the raw table and, enriched, in the parsed table.
    pub fn with_tokens<K, V>(
        mut self,
        category: &str,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: Into<TokenValue>,
    {
        for (name, value) in values {
            let key = TokenKey::parse(&format!("{}.{}", category, name.as_ref()))?;
            self.insert_token(key, value.into());
        }
        Ok(self)
    }

    /// Adds a single generic token by full reference (either spelling).
    pub fn with_token(
        mut self,
        reference: &str,
        value: impl Into<TokenValue>,
    ) -> Result<Self, ConfigError> {
        let key = TokenKey::parse(reference)?;
        self.insert_token(key, value.into());
        Ok(self)
    }

    /// Adds a category-qualified override. Overrides win over generic tokens
    /// of the same base name in every merged view.
    pub fn with_specific_token(
        mut self,
        reference: &str,
        value: impl Into<TokenValue>,
    ) -> Result<Self, ConfigError> {
        let key = TokenKey::parse(reference)?;
        let entry = self.parsed_entry(&key, value.into());
        self.specific_tokens.insert(key, entry);
        Ok(self)
    }

    /// Adds or replaces a named theme.
    pub fn with_theme<K, V>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<TokenValue>,
    {
        let theme: Theme = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.themes.insert(name.into(), theme);
        self
    }

    /// Registers a font face; the parsed descriptor is derived here.
    pub fn with_font(self, name: impl Into<String>, face: FontFace) -> Self {
        let name = name.into();
        let parsed = self.parse_font(&name, &face);
        self.fonts.insert(name, face, parsed);
        self
    }

    /// Finalizes the configuration.
    pub fn build(self) -> Configuration {
        Configuration {
            tokens: self.tokens,
            tokens_parsed: self.tokens_parsed,
            specific_tokens: self.specific_tokens,
            themes: Arc::new(self.themes),
            fonts: self.fonts,
        }
    }

    fn insert_token(&mut self, key: TokenKey, value: TokenValue) {
        let parsed = self.parsed_entry(&key, value.clone());
        self.tokens.insert(key.clone(), TokenEntry::new(value));
        self.tokens_parsed.insert(key, parsed);
    }

    fn parsed_entry(&self, key: &TokenKey, value: TokenValue) -> TokenEntry {
        if self.platform.supports_variables() {
            TokenEntry::with_variable(value, Variable::new(slug::slugify(key.bare())))
        } else {
            TokenEntry::new(value)
        }
    }

    fn parse_font(&self, name: &str, face: &FontFace) -> ParsedFontFace {
        let family = if self.platform.supports_variables() {
            TokenEntry::with_variable(
                face.family.clone(),
                Variable::new(format!("f-{}-family", slug::slugify(name))),
            )
        } else {
            TokenEntry::new(face.family.clone())
        };
        let attributes = face
            .attributes
            .iter()
            .map(|(attr, value)| {
                let entry = if self.platform.supports_variables() {
                    TokenEntry::with_variable(
                        value.clone(),
                        Variable::new(format!(
                            "f-{}-{}",
                            slug::slugify(name),
                            slug::slugify(attr)
                        )),
                    )
                } else {
                    TokenEntry::new(value.clone())
                };
                (attr.clone(), entry)
            })
            .collect();
        ParsedFontFace { family, attributes }
    }
}

/// A JSON-friendly configuration definition.
///
/// Token categories nest one level (`{"space": {"md": 10}}`); specific
/// overrides are flat references in either spelling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDefinition {
    #[serde(default)]
    pub tokens: BTreeMap<String, BTreeMap<String, TokenValue>>,
    #[serde(default)]
    pub specific_tokens: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub themes: ThemeTable,
    #[serde(default)]
    pub fonts: BTreeMap<String, FontFace>,
}

impl ConfigDefinition {
    /// Parses a definition from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assembles the definition into a configuration for `platform`.
    pub fn into_configuration(self, platform: Platform) -> Result<Configuration, ConfigError> {
        let mut builder = ConfigurationBuilder::new(platform);
        for (category, values) in self.tokens {
            builder = builder.with_tokens(&category, values)?;
        }
        for (reference, value) in self.specific_tokens {
            builder = builder.with_specific_token(&reference, value)?;
        }
        for (name, theme) in self.themes {
            builder = builder.with_theme(name, theme);
        }
        for (name, face) in self.fonts {
            builder = builder.with_font(name, face);
        }
        Ok(builder.build())
    }
}

impl Configuration {
    /// Parses a JSON definition and assembles it for `platform`.
    pub fn from_json(json: &str, platform: Platform) -> Result<Configuration, ConfigError> {
        ConfigDefinition::from_json(json)?.into_configuration(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> TokenKey {
        TokenKey::parse(s).unwrap()
    }

    #[test]
    fn test_web_build_mints_variables() {
        let config = Configuration::builder(Platform::Web)
            .with_tokens("space", [("md", 10)])
            .unwrap()
            .build();

        let parsed = &config.tokens_parsed[&key("space.md")];
        assert_eq!(parsed.variable, Some(Variable::new("space-md")));
        // The raw table never carries bindings.
        assert_eq!(config.tokens[&key("space.md")].variable, None);
    }

    #[test]
    fn test_native_build_has_no_variables() {
        let config = Configuration::builder(Platform::Native)
            .with_tokens("space", [("md", 10)])
            .unwrap()
            .build();

        assert_eq!(config.tokens_parsed[&key("space.md")].variable, None);
    }

    #[test]
    fn test_specific_token_accepts_either_spelling() {
        let config = Configuration::builder(Platform::Native)
            .with_specific_token("$space.lg", 20)
            .unwrap()
            .build();

        assert!(config.specific_tokens.contains_key(&key("space.lg")));
    }

    #[test]
    fn test_invalid_reference_is_rejected() {
        let result = Configuration::builder(Platform::Native).with_token("space..md", 10);
        assert!(matches!(result, Err(ConfigError::InvalidReference(_))));
    }

    #[test]
    fn test_from_json_definition() {
        let config = Configuration::from_json(
            r##"{
                "tokens": { "space": { "md": 10 } },
                "specificTokens": { "$space.lg": 20 },
                "themes": { "dark": { "background": "#111" } },
                "fonts": { "body": { "family": "Inter" } }
            }"##,
            Platform::Native,
        )
        .unwrap();

        assert_eq!(config.tokens[&key("space.md")].val, TokenValue::Number(10.0));
        assert_eq!(
            config.specific_tokens[&key("space.lg")].val,
            TokenValue::Number(20.0)
        );
        assert_eq!(config.themes["dark"]["background"], TokenValue::from("#111"));
        assert_eq!(
            config.fonts.get("body").unwrap().family_name(),
            Some("Inter")
        );
    }

    #[test]
    fn test_font_parsing_on_web() {
        let mut face = FontFace::new("Inter");
        face.attributes
            .insert("size.md".to_string(), TokenValue::Number(16.0));

        let config = Configuration::builder(Platform::Web)
            .with_font("body", face)
            .build();

        let parsed = config.fonts.get("body").unwrap();
        assert_eq!(
            parsed.family.variable,
            Some(Variable::new("f-body-family"))
        );
        assert_eq!(
            parsed.attributes["size.md"].variable,
            Some(Variable::new("f-body-size-md"))
        );
    }
}
