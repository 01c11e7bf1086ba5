// src/error.rs
//! Defines the unified error type for all store operations.

use swatch_tokens::KeyParseError;
use thiserror::Error;

/// The main error enum for all high-level operations within the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No configuration has ever been installed. Callers must publish a
    /// configuration before reading or patching it.
    #[error("{}", not_initialized_message())]
    NotInitialized,

    /// A requested token reference is absent from the merged view. Absent
    /// tokens indicate a configuration or call-site bug, so there is no
    /// silent default.
    #[error("token '{0}' is not defined in the active configuration")]
    TokenNotFound(String),

    /// A token reference could not be parsed in either spelling.
    #[error("invalid token reference: {0}")]
    InvalidReference(#[from] KeyParseError),

    /// A configuration definition could not be read.
    #[error("configuration definition error: {0}")]
    Definition(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Definition(e.to_string())
    }
}

// Release builds surface an opaque code instead of a hint that describes the
// store's internal shape.
fn not_initialized_message() -> &'static str {
    if cfg!(debug_assertions) {
        "no active configuration: build one with ConfigurationBuilder and install it with StyleRuntime::set_config before reading"
    } else {
        "configuration error E01"
    }
}
