//! Compute-once cache for the three merged token views.

use crate::config::Configuration;
use std::sync::RwLock;
use swatch_tokens::{MergedViews, compute_views};

/// Caches the result of [`compute_views`] until explicitly invalidated.
///
/// All three views are computed together on first demand; repeated reads
/// hand out the same shared maps, so downstream memoization on identity
/// holds between invalidations.
#[derive(Default)]
pub(crate) struct MergeCache {
    views: RwLock<Option<MergedViews>>,
}

impl MergeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached views, computing them from `config` if needed.
    pub fn views(&self, config: &Configuration) -> MergedViews {
        if let Some(views) = self.views.read().unwrap().as_ref() {
            return views.clone();
        }

        let mut slot = self.views.write().unwrap();
        // Another caller may have filled the slot between the locks.
        if let Some(views) = slot.as_ref() {
            return views.clone();
        }
        let views = compute_views(
            &config.tokens,
            &config.tokens_parsed,
            &config.specific_tokens,
        );
        log::debug!(
            "computed token views: {} merged / {} prefixed / {} unprefixed entries",
            views.merged.len(),
            views.prefixed.len(),
            views.unprefixed.len()
        );
        *slot = Some(views.clone());
        views
    }

    /// Drops the cached views; the next read recomputes.
    pub fn invalidate(&self) {
        let mut slot = self.views.write().unwrap();
        if slot.take().is_some() {
            log::debug!("token view cache invalidated");
        }
    }
}
