//! The owned runtime context holding the active configuration.

use crate::config::{ConfigPatch, Configuration, FontFace, ParsedFontFace, ThemeTable};
use crate::error::ConfigError;
use crate::runtime::listeners::{ListenerSet, Subscription};
use crate::runtime::merger::MergeCache;
use std::sync::{Arc, RwLock};
use swatch_tokens::{TokenMap, TokenView};
use swatch_types::Platform;

/// A container for the single active styling configuration and everything
/// derived from it: the listener registry and the cached token views.
///
/// Created once at application start and threaded through to whatever reads
/// styles; independent runtimes (one per test, one per embedded engine) do
/// not observe each other.
pub struct StyleRuntime {
    platform: Platform,
    active: RwLock<Option<Arc<Configuration>>>,
    listeners: ListenerSet,
    cache: MergeCache,
}

impl StyleRuntime {
    /// Creates an empty runtime resolving tokens for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            active: RwLock::new(None),
            listeners: ListenerSet::new(),
            cache: MergeCache::new(),
        }
    }

    /// The rendering target this runtime resolves tokens for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether a configuration has been installed.
    pub fn is_configured(&self) -> bool {
        self.active.read().unwrap().is_some()
    }

    /// Installs `next` as the active configuration, drops the cached token
    /// views, and notifies every registered listener in registration order.
    pub fn set_config(&self, next: impl Into<Arc<Configuration>>) {
        let next = next.into();
        {
            let mut slot = self.active.write().unwrap();
            *slot = Some(Arc::clone(&next));
        }
        self.cache.invalidate();
        log::debug!(
            "installed configuration: {} tokens, {} specific tokens, {} themes, {} fonts",
            next.tokens.len(),
            next.specific_tokens.len(),
            next.themes.len(),
            next.fonts.len()
        );
        // Listeners run outside the config lock so they may read the runtime.
        self.listeners.flush(&next);
    }

    /// Returns the active configuration.
    pub fn config(&self) -> Result<Arc<Configuration>, ConfigError> {
        self.active
            .read()
            .unwrap()
            .as_ref()
            .map(Arc::clone)
            .ok_or(ConfigError::NotInitialized)
    }

    /// Shallow-merges `patch` into its category of the active configuration.
    ///
    /// The patched record is swapped in atomically; readers never observe a
    /// half-applied merge. Patches do not notify listeners (a patch is not a
    /// replacement), but token-table patches invalidate the cached views.
    pub fn update(&self, patch: ConfigPatch) -> Result<(), ConfigError> {
        let affects_views = patch.affects_token_views();
        {
            let mut slot = self.active.write().unwrap();
            let current = slot.as_ref().ok_or(ConfigError::NotInitialized)?;
            *slot = Some(Arc::new(current.merged_with(patch)));
        }
        if affects_views {
            self.cache.invalidate();
        }
        Ok(())
    }

    /// The themes table of the active configuration.
    pub fn themes(&self) -> Result<Arc<ThemeTable>, ConfigError> {
        Ok(Arc::clone(&self.config()?.themes))
    }

    /// Returns one of the three merged token views. Views are computed
    /// together on first demand and shared until the next replacement or
    /// token patch, so repeated calls return the identical map.
    pub fn tokens(&self, view: TokenView) -> Result<Arc<TokenMap>, ConfigError> {
        let config = self.config()?;
        Ok(self.cache.views(&config).select(view))
    }

    /// Registers `callback` for configuration availability: it fires
    /// immediately if a configuration is already active, and again on every
    /// subsequent replacement, until the subscription is dropped.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Arc<Configuration>) + Send + Sync + 'static,
    ) -> Subscription {
        if let Ok(config) = self.config() {
            callback(&config);
        }
        let subscription = self.listeners.add(Arc::new(callback), false);
        log::debug!("registered configuration listener ({} active)", self.listeners.len());
        subscription
    }

    /// Registers `callback` to fire exactly once ever: immediately if a
    /// configuration is active, otherwise at the first installation.
    pub fn once(
        &self,
        callback: impl Fn(&Arc<Configuration>) + Send + Sync + 'static,
    ) -> Subscription {
        if let Ok(config) = self.config() {
            callback(&config);
            return Subscription::settled();
        }
        self.listeners.add(Arc::new(callback), true)
    }

    /// Registers `face` on the active configuration's font book. Visible to
    /// later lookups without a replacement; the token views stay cached
    /// because fonts are a disjoint namespace.
    pub fn set_config_font(
        &self,
        name: impl Into<String>,
        face: FontFace,
        parsed: ParsedFontFace,
    ) -> Result<(), ConfigError> {
        let config = self.config()?;
        config.fonts.insert(name, face, parsed);
        Ok(())
    }

    /// Looks up a parsed font face by registration key or family value.
    /// Yields `None` when absent or when no configuration is active.
    pub fn font(&self, name: &str) -> Option<ParsedFontFace> {
        self.config().ok()?.fonts.get(name)
    }
}

impl Default for StyleRuntime {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}
