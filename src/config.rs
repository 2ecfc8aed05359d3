//! Application configuration.
//!
//! The whole surface is one read-only `Config` object: site branding,
//! sidebar/banner display options, the admin password, storage keys, the
//! metadata-extraction selector lists with their fallback strings, the
//! favicon provider templates, and the search engine list. Every field has a
//! serde default so a missing or partial config file still yields a fully
//! working application.
//!
//! Loading order: `linkboard.json` in the working directory (path
//! overridable with `LINKBOARD_CONFIG`), then the `LINKBOARD_ADMIN_PASSWORD`
//! environment variable on top for the password.

use serde::Deserialize;
use std::env;
use std::fs;
use tracing::{info, warn};

use crate::models::SearchEngine;

pub const DEFAULT_CONFIG_PATH: &str = "linkboard.json";

// ============================================================================
// Config Sections
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub admin: AdminConfig,
    pub storage: StorageConfig,
    pub web_info: WebInfoConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub logo: String,
    pub favicon: String,
    pub sidebar: SidebarConfig,
    pub banner: BannerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub show_logo: bool,
    pub show_title: bool,
    pub show_description: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub show: bool,
    pub image: String,
    pub height: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory of the sled store.
    pub path: String,
    /// Key holding the JSON-encoded site collection.
    pub sites_key: String,
    /// Key holding the JSON-encoded manual tag order.
    pub tag_order_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebInfoConfig {
    pub selectors: SelectorConfig,
    pub fallback: FallbackConfig,
    pub favicon: FaviconConfig,
}

/// Ordered selector lists tried in sequence; first non-empty match wins.
/// Entries name either a meta tag (`name` or `property` attribute value) or
/// the literal `"title"` for the document title element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub title: Vec<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub title: String,
    pub description: String,
}

/// Favicon provider URL templates with a `{domain}` placeholder. The first
/// template is used; the resulting URL is never verified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    pub providers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub engines: Vec<SearchEngine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

// ============================================================================
// Defaults
// ============================================================================

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            admin: AdminConfig::default(),
            storage: StorageConfig::default(),
            web_info: WebInfoConfig::default(),
            search: SearchConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Linkboard".to_string(),
            description: "A personal link directory".to_string(),
            logo: "/favicon.png".to_string(),
            favicon: "/favicon.png".to_string(),
            sidebar: SidebarConfig::default(),
            banner: BannerConfig::default(),
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            show_logo: true,
            show_title: true,
            show_description: true,
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            show: false,
            image: String::new(),
            height: "200px".to_string(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: "admin".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: ".linkboard_db".to_string(),
            sites_key: "sites".to_string(),
            tag_order_key: "tag_order".to_string(),
        }
    }
}

impl Default for WebInfoConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorConfig::default(),
            fallback: FallbackConfig::default(),
            favicon: FaviconConfig::default(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: vec![
                "og:title".to_string(),
                "twitter:title".to_string(),
                "title".to_string(),
            ],
            description: vec![
                "description".to_string(),
                "og:description".to_string(),
                "twitter:description".to_string(),
            ],
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            description: "No description available".to_string(),
        }
    }
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            providers: vec![
                "https://www.google.com/s2/favicons?domain={domain}&sz=64".to_string(),
                "https://{domain}/favicon.ico".to_string(),
            ],
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engines: vec![
                SearchEngine {
                    name: "Local".to_string(),
                    search_url: "local".to_string(),
                },
                SearchEngine {
                    name: "Google".to_string(),
                    search_url: "https://www.google.com/search?q={query}".to_string(),
                },
                SearchEngine {
                    name: "Bing".to_string(),
                    search_url: "https://www.bing.com/search?q={query}".to_string(),
                },
                SearchEngine {
                    name: "Baidu".to_string(),
                    search_url: "https://www.baidu.com/s?wd={query}".to_string(),
                },
            ],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

impl Config {
    /// Load the configuration file, falling back to defaults when it is
    /// missing or malformed. The admin password may be overridden with
    /// `LINKBOARD_ADMIN_PASSWORD`.
    pub fn load() -> Self {
        let path =
            env::var("LINKBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Config>(&raw) {
                Ok(c) => {
                    info!("Loaded configuration from {path}");
                    c
                }
                Err(e) => {
                    warn!("Invalid configuration in {path}: {e}; using defaults");
                    Config::default()
                }
            },
            Err(_) => {
                info!("No configuration file at {path}; using defaults");
                Config::default()
            }
        };

        if let Ok(password) = env::var("LINKBOARD_ADMIN_PASSWORD") {
            if !password.is_empty() {
                config.admin.password = password;
            }
        }

        config
    }

    /// Engines with a guaranteed non-empty list: a bare local engine is
    /// restored if the configured list was emptied out.
    pub fn engines(&self) -> Vec<SearchEngine> {
        if self.search.engines.is_empty() {
            SearchConfig::default().engines
        } else {
            self.search.engines.clone()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let config = Config::default();
        assert!(!config.web_info.selectors.title.is_empty());
        assert!(!config.web_info.selectors.description.is_empty());
        assert!(!config.web_info.favicon.providers.is_empty());
        assert!(config.search.engines.iter().any(|e| e.is_local()));
        assert_eq!(config.storage.sites_key, "sites");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"site": {"title": "My Links"}}"#).unwrap();
        assert_eq!(config.site.title, "My Links");
        assert_eq!(config.site.banner.height, "200px");
        assert_eq!(config.admin.password, "admin");
        assert!(!config.search.engines.is_empty());
    }

    #[test]
    fn empty_engine_list_restored() {
        let config: Config = serde_json::from_str(r#"{"search": {"engines": []}}"#).unwrap();
        assert!(!config.engines().is_empty());
    }
}
