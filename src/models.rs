//! Data models for the link directory.
//!
//! This module contains the core data structures used throughout the
//! application: the bookmarked site record, search engine entries, and the
//! request/response payloads of the admin JSON API.

use serde::{Deserialize, Serialize};

// ============================================================================
// Core Site Record
// ============================================================================

/// One entry in the directory. The `url` acts as the de facto primary key:
/// `update` and `delete` match on exact URL equality, and uniqueness is
/// assumed but never enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Site {
    pub fn new(title: &str, description: &str, url: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Built-in collection written on first start when the store is empty.
pub fn default_sites() -> Vec<Site> {
    vec![
        Site::new(
            "GitHub",
            "The world's largest code hosting platform",
            "https://github.com",
            &["dev tools", "code hosting"],
        ),
        Site::new(
            "Stack Overflow",
            "Q&A community for programmers",
            "https://stackoverflow.com",
            &["dev tools", "community"],
        ),
    ]
}

// ============================================================================
// Search Engines
// ============================================================================

/// A search engine selectable from the search bar. `search_url` is either a
/// URL template containing `{query}` or the literal `"local"`, which selects
/// in-memory filtering instead of an external redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    pub search_url: String,
}

impl SearchEngine {
    pub fn is_local(&self) -> bool {
        self.search_url == "local"
    }
}

// ============================================================================
// Web Metadata
// ============================================================================

/// Metadata extracted by the fetch-web-info proxy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebInfo {
    pub title: String,
    pub description: String,
    pub favicon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchWebInfoRequest {
    pub url: String,
}

// ============================================================================
// Admin API Payloads
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteRequest {
    /// URL of the record being replaced, before the edit.
    pub original_url: String,
    pub site: Site,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteSitesRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameTagRequest {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteTagRequest {
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagOrderRequest {
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
