//! Linkboard library - re-exports for testing and external use.
//!
//! This module provides public access to the application's modules for
//! testing purposes and potential library use.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod search;
pub mod store;
pub mod tags;
pub mod templates;
pub mod web_info;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub config: config::Config,
    pub store: store::SiteStore,
}

impl AppState {
    pub fn new() -> Self {
        let config = config::Config::load();
        let store = store::SiteStore::open(&config.storage);
        Self { config, store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use models::{default_sites, SearchEngine, Site, WebInfo};
pub use search::{engine_favicon, external_search_url, search_sites};
pub use store::SiteStore;
pub use tags::{
    all_tags, delete_tag, filter_by_tag, is_pseudo_tag, remove_from_order, rename_in_order,
    rename_tag, reorder, sidebar_order, site_count, TagError, TAG_ALL, TAG_UNCATEGORIZED,
};
pub use web_info::{extract_web_info, favicon_url, fetch_web_info, validate_fetch_url};
