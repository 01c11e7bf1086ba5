use serde::{Deserialize, Deserializer, Serialize};

/// A resolved design-token scalar.
///
/// Token definitions mix numeric values (spacing, radii, line heights) with
/// string values (colors, font stacks) and the occasional flag, so the value
/// side of a token entry is an untagged scalar rather than a fixed primitive.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Str(String),
    Bool(bool),
}

impl TokenValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value the way it would be written into a style declaration.
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            TokenValue::Str(s) => s.clone(),
            TokenValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<i32> for TokenValue {
    fn from(n: i32) -> Self {
        TokenValue::Number(n as f64)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Str(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Str(s)
    }
}

impl From<bool> for TokenValue {
    fn from(b: bool) -> Self {
        TokenValue::Bool(b)
    }
}

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ValueDef {
            Num(f64),
            Str(String),
            Bool(bool),
        }

        match ValueDef::deserialize(deserializer)? {
            ValueDef::Num(n) => Ok(TokenValue::Number(n)),
            ValueDef::Str(s) => Ok(TokenValue::Str(s)),
            ValueDef::Bool(b) => Ok(TokenValue::Bool(b)),
        }
    }
}
