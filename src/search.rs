//! Local search and external engine URL templating.
//!
//! The search bar has two mutually exclusive modes picked by the selected
//! engine: the `local` sentinel filters the in-memory collection, anything
//! else substitutes the query into the engine's `{query}` URL template and
//! the page script opens it in a new tab without touching the displayed
//! list.

use crate::models::{SearchEngine, Site};
use url::Url;

// ============================================================================
// Local Search
// ============================================================================

/// Case-insensitive substring match of the query against title, description,
/// and the space-joined tag list of each record. A query matching nothing
/// yields an empty result, never an error.
pub fn search_sites<'a>(sites: &'a [Site], query: &str) -> Vec<&'a Site> {
    let query_lower = query.to_lowercase();
    if query_lower.trim().is_empty() {
        return sites.iter().collect();
    }

    sites
        .iter()
        .filter(|site| {
            let haystack = format!(
                "{} {} {}",
                site.title,
                site.description,
                site.tags.join(" ")
            )
            .to_lowercase();
            haystack.contains(&query_lower)
        })
        .collect()
}

// ============================================================================
// External Engines
// ============================================================================

/// Substitute the percent-encoded query into the engine's URL template.
/// Local engines have no external URL.
pub fn external_search_url(engine: &SearchEngine, query: &str) -> Option<String> {
    if engine.is_local() {
        return None;
    }
    Some(
        engine
            .search_url
            .replace("{query}", &urlencoding::encode(query)),
    )
}

/// Favicon for the engine dropdown, derived from the engine URL's host via
/// the provider template. Local engines and unparseable URLs use the bundled
/// fallback icon.
pub fn engine_favicon(engine: &SearchEngine, provider_template: &str) -> String {
    if engine.is_local() {
        return "/favicon.png".to_string();
    }
    match Url::parse(&engine.search_url).ok().and_then(|u| {
        u.host_str()
            .map(|h| provider_template.replace("{domain}", h))
    }) {
        Some(url) => url,
        None => "/favicon.png".to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sites() -> Vec<Site> {
        vec![
            Site::new("GitHub", "Code hosting platform", "https://github.com", &["dev"]),
            Site::new("Hacker News", "Tech news aggregator", "https://news.ycombinator.com", &["news", "tech"]),
        ]
    }

    #[test]
    fn search_is_case_insensitive_over_title() {
        let sites = sites();
        let hits = search_sites(&sites, "GITHUB");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://github.com");
    }

    #[test]
    fn search_matches_description_and_tags() {
        let sites = sites();
        assert_eq!(search_sites(&sites, "aggregator").len(), 1);
        assert_eq!(search_sites(&sites, "tech").len(), 1);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        assert!(search_sites(&sites(), "zzz-no-such-thing").is_empty());
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(search_sites(&sites(), "  ").len(), 2);
    }

    #[test]
    fn external_url_substitutes_encoded_query() {
        let engine = SearchEngine {
            name: "Google".to_string(),
            search_url: "https://www.google.com/search?q={query}".to_string(),
        };
        assert_eq!(
            external_search_url(&engine, "rust web framework").as_deref(),
            Some("https://www.google.com/search?q=rust%20web%20framework")
        );
    }

    #[test]
    fn local_engine_has_no_external_url() {
        let engine = SearchEngine {
            name: "Local".to_string(),
            search_url: "local".to_string(),
        };
        assert_eq!(external_search_url(&engine, "anything"), None);
    }

    #[test]
    fn engine_favicon_uses_provider_template() {
        let engine = SearchEngine {
            name: "Bing".to_string(),
            search_url: "https://www.bing.com/search?q={query}".to_string(),
        };
        assert_eq!(
            engine_favicon(&engine, "https://icons.example/{domain}.png"),
            "https://icons.example/www.bing.com.png"
        );
    }

    #[test]
    fn local_engine_favicon_falls_back() {
        let engine = SearchEngine {
            name: "Local".to_string(),
            search_url: "local".to_string(),
        };
        assert_eq!(engine_favicon(&engine, "https://x/{domain}"), "/favicon.png");
    }
}
