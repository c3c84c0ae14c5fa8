//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use qi_registry::Registry;
use qi_site::{CatalogPage, PreviewSource};

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// The component catalog. Read-only for the process lifetime.
    pub(crate) registry: &'static Registry,
    /// Source of live previews for detail pages.
    pub(crate) previews: Arc<dyn PreviewSource>,
    /// Brand shown in page titles.
    pub(crate) site_title: String,
    /// Public base URL for registry index entries.
    pub(crate) base_url: String,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    /// Page renderer bound to this state.
    pub(crate) fn pages(&self) -> CatalogPage<'_> {
        CatalogPage::new(self.registry, &self.site_title)
    }
}
