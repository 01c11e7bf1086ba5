//! # swatch
//!
//! Design-token configuration store for cross-platform styling runtimes.
//!
//! This crate provides the storage, merge, cache, and resolution layer for an
//! already-parsed design-token set:
//! - **config**: the typed [`Configuration`] record, its builder, and the
//!   font book
//! - **runtime**: the owned [`StyleRuntime`] context with the active
//!   configuration, listener registry, and compute-once token-view cache
//! - **error**: the unified [`ConfigError`] type
//!
//! ## Design Principle
//!
//! There is no ambient global state: a [`StyleRuntime`] is created once at
//! application start and threaded through to whatever resolves styles.
//! Independent runtimes (one per test case, one per embedded engine) never
//! observe each other. All operations are synchronous and non-suspending;
//! every failure surfaces at the offending call site.
//!
//! ```
//! use swatch::{Configuration, Platform, StyleRuntime, TokenValue};
//!
//! let runtime = StyleRuntime::new(Platform::Native);
//! let config = Configuration::builder(Platform::Native)
//!     .with_tokens("space", [("md", 10)])?
//!     .build();
//! runtime.set_config(config);
//!
//! assert_eq!(runtime.token("$space.md")?, TokenValue::Number(10.0));
//! # Ok::<(), swatch::ConfigError>(())
//! ```

// Re-export foundation crates
pub use swatch_tokens as tokens;
pub use swatch_types as types;

pub mod config;
pub mod error;
pub mod runtime;

// Re-export commonly used types from foundation crates
pub use tokens::{KeyParseError, MergedViews, TokenEntry, TokenKey, TokenMap, TokenTable, TokenView};
pub use types::{Platform, TokenValue, Variable};

// Re-export from internal modules
pub use config::{
    ConfigDefinition, ConfigPatch, Configuration, ConfigurationBuilder, FontBook, FontFace,
    ParsedFontFace, Theme, ThemeTable,
};
pub use error::ConfigError;
pub use runtime::{StyleRuntime, Subscription};
