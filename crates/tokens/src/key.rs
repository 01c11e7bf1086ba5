//! Typed token references and their nom grammar.
//!
//! Call sites historically named tokens in two spellings: a bare form
//! (`space.md`) and a sigil form (`$space.md`). `TokenKey` collapses both into
//! one canonical key so lookups never depend on how the reference was written.

use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Errors that can occur while parsing a token reference.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty token reference")]
    Empty,

    #[error("invalid token reference: '{0}'")]
    Invalid(String),
}

/// A canonical token key.
///
/// Stores the bare, sigil-free spelling (`space.md`); the sigil form is a
/// pure rendering via [`TokenKey::prefixed`]. Cheap to clone.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TokenKey(Arc<str>);

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-').parse(input)
}

fn bare_reference(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(char('.'), ident)).parse(input)
}

fn reference(input: &str) -> IResult<&str, &str> {
    preceded(opt(char('$')), bare_reference).parse(input)
}

impl TokenKey {
    /// Parses a reference in either spelling into its canonical key.
    pub fn parse(input: &str) -> Result<Self, KeyParseError> {
        if input.is_empty() {
            return Err(KeyParseError::Empty);
        }
        match all_consuming(reference).parse(input) {
            Ok((_, bare)) => Ok(Self(bare.into())),
            Err(_) => Err(KeyParseError::Invalid(input.to_string())),
        }
    }

    /// Returns the bare spelling, e.g. `space.md`.
    pub fn bare(&self) -> &str {
        &self.0
    }

    /// Returns the sigil spelling, e.g. `$space.md`.
    pub fn prefixed(&self) -> String {
        format!("${}", self.0)
    }

    /// Returns the category segment (everything before the first `.`), e.g.
    /// `space` for `space.md`. Single-segment keys are their own category.
    pub fn category(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for TokenKey {
    type Error = KeyParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for TokenKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TokenKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TokenKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare() {
        let key = TokenKey::parse("space.md").unwrap();
        assert_eq!(key.bare(), "space.md");
    }

    #[test]
    fn test_parse_prefixed() {
        let key = TokenKey::parse("$space.md").unwrap();
        assert_eq!(key.bare(), "space.md");
        assert_eq!(key.prefixed(), "$space.md");
    }

    #[test]
    fn test_both_spellings_are_one_key() {
        assert_eq!(
            TokenKey::parse("$color.red").unwrap(),
            TokenKey::parse("color.red").unwrap()
        );
    }

    #[test]
    fn test_single_segment() {
        let key = TokenKey::parse("true").unwrap();
        assert_eq!(key.bare(), "true");
        assert_eq!(key.category(), "true");
    }

    #[test]
    fn test_category() {
        assert_eq!(TokenKey::parse("$size.lg").unwrap().category(), "size");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(TokenKey::parse(""), Err(KeyParseError::Empty));
    }

    #[test]
    fn test_bare_sigil_is_rejected() {
        assert!(matches!(
            TokenKey::parse("$"),
            Err(KeyParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_embedded_whitespace_is_rejected() {
        assert!(matches!(
            TokenKey::parse("space md"),
            Err(KeyParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_trailing_dot_is_rejected() {
        assert!(matches!(
            TokenKey::parse("space."),
            Err(KeyParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let key: TokenKey = serde_json::from_str("\"$space.md\"").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"space.md\"");
    }
}
