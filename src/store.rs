//! Site Store: the persistence layer.
//!
//! The whole bookmark collection lives as one JSON-encoded array under a
//! single key in an embedded sled store, alongside a second key holding the
//! manually persisted tag order. Every mutation reads the entire collection,
//! transforms it in memory, and writes the entire collection back; there is
//! no partial update and no transaction log. Concurrent writers are
//! last-write-wins.
//!
//! When the store cannot be opened the `SiteStore` carries no handle: reads
//! return an empty collection and writes are silent no-ops. That degradation
//! is required compatibility behavior, not an error.

use crate::config::StorageConfig;
use crate::models::{default_sites, Site};
use tracing::{error, warn};

// ============================================================================
// Site Store
// ============================================================================

pub struct SiteStore {
    db: Option<sled::Db>,
    sites_key: String,
    tag_order_key: String,
}

impl SiteStore {
    /// Open the store and seed the built-in default sites when the
    /// collection key is absent. An unopenable store degrades to the
    /// empty/no-op mode.
    pub fn open(config: &StorageConfig) -> Self {
        let db = match sled::open(&config.path) {
            Ok(db) => Some(db),
            Err(e) => {
                warn!(
                    "Cannot open store at {}: {e}; serving an empty collection",
                    config.path
                );
                None
            }
        };

        let store = Self {
            db,
            sites_key: config.sites_key.clone(),
            tag_order_key: config.tag_order_key.clone(),
        };
        store.seed_if_empty();
        store
    }

    /// An in-memory store for tests, seeded like a first start.
    #[cfg(test)]
    pub fn temporary() -> Self {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .expect("temporary store");
        let store = Self {
            db: Some(db),
            sites_key: "sites".to_string(),
            tag_order_key: "tag_order".to_string(),
        };
        store.seed_if_empty();
        store
    }

    /// A store with no backing handle, as when opening failed.
    #[cfg(test)]
    pub fn detached() -> Self {
        Self {
            db: None,
            sites_key: "sites".to_string(),
            tag_order_key: "tag_order".to_string(),
        }
    }

    fn seed_if_empty(&self) {
        let Some(db) = &self.db else { return };
        if !db.contains_key(&self.sites_key).unwrap_or(false) {
            self.replace_all(&default_sites());
        }
    }

    // ------------------------------------------------------------------------
    // Collection
    // ------------------------------------------------------------------------

    /// The full collection; empty when the key is absent, the value fails to
    /// decode, or the store is unavailable.
    pub fn list(&self) -> Vec<Site> {
        let Some(db) = &self.db else {
            return Vec::new();
        };
        match db.get(&self.sites_key) {
            Ok(Some(raw)) => serde_json::from_slice(&raw).unwrap_or_else(|e| {
                error!("Corrupt site collection: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Store read failed: {e}");
                Vec::new()
            }
        }
    }

    /// Overwrite the whole collection in one write.
    pub fn replace_all(&self, sites: &[Site]) {
        let Some(db) = &self.db else { return };
        match serde_json::to_vec(sites) {
            Ok(encoded) => {
                if let Err(e) = db.insert(&self.sites_key, encoded) {
                    error!("Store write failed: {e}");
                }
            }
            Err(e) => error!("Site collection failed to encode: {e}"),
        }
    }

    /// Append a record. Duplicate URLs are not rejected; the new record
    /// simply coexists with any existing one.
    pub fn add(&self, site: Site) {
        let mut sites = self.list();
        sites.push(site);
        self.replace_all(&sites);
    }

    /// Replace the first record whose `url` equals `match_url`. A missing
    /// match leaves the collection untouched.
    pub fn update(&self, match_url: &str, new_site: Site) {
        let mut sites = self.list();
        if let Some(existing) = sites.iter_mut().find(|s| s.url == match_url) {
            *existing = new_site;
            self.replace_all(&sites);
        }
    }

    /// Remove every record whose `url` is in `urls`, preserving the order of
    /// the remainder.
    pub fn delete_many(&self, urls: &[String]) {
        let mut sites = self.list();
        sites.retain(|s| !urls.contains(&s.url));
        self.replace_all(&sites);
    }

    // ------------------------------------------------------------------------
    // Tag Order
    // ------------------------------------------------------------------------

    /// The manually persisted tag order, if one was ever written. May list
    /// tags that no longer exist and omit tags that now do; callers must
    /// reconcile against the derived tag set.
    pub fn tag_order(&self) -> Option<Vec<String>> {
        let db = self.db.as_ref()?;
        match db.get(&self.tag_order_key) {
            Ok(Some(raw)) => serde_json::from_slice(&raw).ok(),
            _ => None,
        }
    }

    pub fn set_tag_order(&self, order: &[String]) {
        let Some(db) = &self.db else { return };
        match serde_json::to_vec(order) {
            Ok(encoded) => {
                if let Err(e) = db.insert(&self.tag_order_key, encoded) {
                    error!("Tag order write failed: {e}");
                }
            }
            Err(e) => error!("Tag order failed to encode: {e}"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_store() -> SiteStore {
        let store = SiteStore::temporary();
        store.replace_all(&[]);
        store
    }

    #[test]
    fn seeds_defaults_on_first_open() {
        let store = SiteStore::temporary();
        let sites = store.list();
        assert_eq!(sites.len(), default_sites().len());
        assert!(sites.iter().any(|s| s.url == "https://github.com"));
    }

    #[test]
    fn add_then_list_grows_by_one() {
        let store = empty_store();
        store.add(Site::new("Example", "An example", "https://example.com", &["misc"]));

        let sites = store.list();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].title, "Example");
        assert_eq!(sites[0].tags, vec!["misc"]);
    }

    #[test]
    fn add_keeps_duplicate_urls() {
        let store = empty_store();
        store.add(Site::new("One", "", "https://a.com", &[]));
        store.add(Site::new("Two", "", "https://a.com", &[]));
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn update_replaces_matching_record_only() {
        let store = empty_store();
        store.add(Site::new("One", "first", "https://a.com", &["x"]));
        store.add(Site::new("Two", "second", "https://b.com", &[]));

        store.update(
            "https://a.com",
            Site::new("One+", "edited", "https://a.com", &["y"]),
        );

        let sites = store.list();
        assert_eq!(sites[0].title, "One+");
        assert_eq!(sites[0].tags, vec!["y"]);
        assert_eq!(sites[1].title, "Two");
    }

    #[test]
    fn update_with_unknown_url_is_a_noop() {
        let store = empty_store();
        store.add(Site::new("One", "", "https://a.com", &[]));
        store.update("https://missing.com", Site::new("X", "", "https://x.com", &[]));
        assert_eq!(store.list()[0].title, "One");
    }

    #[test]
    fn delete_many_removes_exactly_the_named_urls() {
        let store = empty_store();
        store.add(Site::new("A", "a", "https://a.com", &["t"]));
        store.add(Site::new("B", "b", "https://b.com", &[]));
        store.add(Site::new("C", "c", "https://c.com", &["t"]));

        store.delete_many(&["https://a.com".to_string(), "https://c.com".to_string()]);

        let sites = store.list();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].url, "https://b.com");
        assert_eq!(sites[0].description, "b");
    }

    #[test]
    fn tag_order_round_trips() {
        let store = empty_store();
        assert_eq!(store.tag_order(), None);

        store.set_tag_order(&["b".to_string(), "a".to_string()]);
        assert_eq!(store.tag_order(), Some(vec!["b".to_string(), "a".to_string()]));
    }

    #[test]
    fn detached_store_reads_empty_and_ignores_writes() {
        let store = SiteStore::detached();
        assert!(store.list().is_empty());

        store.add(Site::new("A", "", "https://a.com", &[]));
        store.set_tag_order(&["x".to_string()]);

        assert!(store.list().is_empty());
        assert_eq!(store.tag_order(), None);
    }
}
