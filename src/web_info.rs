//! Web metadata fetching for the add-site autofill.
//!
//! Fetches a caller-supplied URL server-side (the admin form cannot read
//! cross-origin pages itself), extracts a title and description from the raw
//! HTML via the configured selector lists, and derives a favicon URL from
//! the page's domain through a provider template. Extraction is regex over
//! the markup; each selector list is tried in order and the first non-empty
//! match wins, falling back to the configured default strings.
//!
//! The outbound fetch is bounded rather than allowlisted: only http/https
//! targets, hosts resolving to internal addresses are rejected, and the
//! request carries a hard timeout. Fetching arbitrary public URLs on behalf
//! of the caller is the feature; the residual exposure is an accepted,
//! documented risk.

use crate::config::WebInfoConfig;
use crate::models::WebInfo;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};
use std::time::Duration;
use tracing::warn;
use url::Url;

const FETCH_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; Linkboard/1.0)";

// ============================================================================
// Fetch
// ============================================================================

/// Fetch `url` and extract `{title, description, favicon}` per the
/// configured selectors. `None` means the fetch failed; extraction itself
/// cannot fail because every selector list has a fallback string.
pub async fn fetch_web_info(config: &WebInfoConfig, url: &str) -> Option<WebInfo> {
    let target = match validate_fetch_url(url) {
        Ok(u) => u,
        Err(e) => {
            warn!("Rejected fetch target {url}: {e}");
            return None;
        }
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .ok()?;

    let response = client.get(target).send().await.ok()?;
    let html = response.text().await.ok()?;

    Some(extract_web_info(config, url, &html))
}

/// Pure extraction half, separated from the network so it can be tested on
/// canned markup.
pub fn extract_web_info(config: &WebInfoConfig, url: &str, html: &str) -> WebInfo {
    let title = extract_first(html, &config.selectors.title)
        .unwrap_or_else(|| config.fallback.title.clone());
    let description = extract_first(html, &config.selectors.description)
        .unwrap_or_else(|| config.fallback.description.clone());
    let favicon = favicon_url(&config.favicon.providers, url);

    WebInfo {
        title,
        description,
        favicon,
    }
}

// ============================================================================
// Selector Extraction
// ============================================================================

/// Try each selector in order; first non-empty match wins. A selector names
/// a meta tag (matched against both `name` and `property` attributes, in
/// either attribute order) except the literal `"title"`, which reads the
/// document title element.
fn extract_first(html: &str, selectors: &[String]) -> Option<String> {
    for selector in selectors {
        let found = if selector == "title" {
            extract_html_title(html)
        } else {
            extract_meta_content(html, selector)
        };
        if let Some(value) = found {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

fn extract_meta_content(html: &str, name: &str) -> Option<String> {
    // Try name="X" / property="X" with the content attribute on either side.
    let patterns = [
        format!(
            r#"(?i)<meta[^>]*name=["']{}["'][^>]*content=["']([^"']+)["']"#,
            regex::escape(name)
        ),
        format!(
            r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*name=["']{}["']"#,
            regex::escape(name)
        ),
        format!(
            r#"(?i)<meta[^>]*property=["']{}["'][^>]*content=["']([^"']+)["']"#,
            regex::escape(name)
        ),
        format!(
            r#"(?i)<meta[^>]*content=["']([^"']+)["'][^>]*property=["']{}["']"#,
            regex::escape(name)
        ),
    ];

    for pattern in &patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(html) {
                if let Some(m) = caps.get(1) {
                    let content = m.as_str().trim();
                    if !content.is_empty() {
                        return Some(html_entity_decode(content));
                    }
                }
            }
        }
    }
    None
}

fn extract_html_title(html: &str) -> Option<String> {
    let re = Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").ok()?;
    let caps = re.captures(html)?;
    let title = html_entity_decode(caps.get(1)?.as_str().trim());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn html_entity_decode(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
}

// ============================================================================
// Favicon
// ============================================================================

/// Substitute the URL's host into the first provider template. The returned
/// URL is never verified against the network.
pub fn favicon_url(providers: &[String], url: &str) -> Option<String> {
    let host = Url::parse(url).ok()?.host_str()?.to_string();
    providers
        .first()
        .map(|template| template.replace("{domain}", &host))
}

// ============================================================================
// Outbound URL Guard
// ============================================================================

/// Check a fetch target before the request goes out: http/https only, and
/// the host must not resolve to a loopback, private, or link-local address.
/// There is no domain allowlist; arbitrary public bookmarks are the point.
pub fn validate_fetch_url(url_str: &str) -> Result<Url, String> {
    let url = Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme: {}", url.scheme()));
    }

    let host = url.host_str().ok_or_else(|| "no host in URL".to_string())?;
    let port = url
        .port()
        .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    let addrs = format!("{host}:{port}")
        .to_socket_addrs()
        .map_err(|e| format!("DNS resolution failed: {e}"))?;
    for addr in addrs {
        if is_internal_ip(&addr.ip()) {
            return Err(format!("internal address: {}", addr.ip()));
        }
    }

    Ok(url)
}

fn is_internal_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_internal_ipv4(v4),
        IpAddr::V6(v6) => is_internal_ipv6(v6),
    }
}

fn is_internal_ipv4(ip: &Ipv4Addr) -> bool {
    ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_unspecified()
        // Shared address space (100.64.0.0/10)
        || (ip.octets()[0] == 100 && (ip.octets()[1] & 0xC0) == 64)
}

fn is_internal_ipv6(ip: &Ipv6Addr) -> bool {
    ip.is_loopback()
        || ip.is_unspecified()
        || ip.to_ipv4_mapped().map(|v4| is_internal_ipv4(&v4)).unwrap_or(false)
        // Unique local (fc00::/7)
        || (ip.segments()[0] & 0xFE00) == 0xFC00
        // Link-local (fe80::/10)
        || (ip.segments()[0] & 0xFFC0) == 0xFE80
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebInfoConfig;

    fn config() -> WebInfoConfig {
        WebInfoConfig::default()
    }

    #[test]
    fn og_title_wins_over_title_element() {
        let html = r#"<html><head>
            <meta property="og:title" content="From OG">
            <title>From Title Tag</title>
        </head></html>"#;
        let info = extract_web_info(&config(), "https://example.com", html);
        assert_eq!(info.title, "From OG");
    }

    #[test]
    fn title_element_is_the_last_resort_selector() {
        let html = "<html><head><title>Plain Page</title></head></html>";
        let info = extract_web_info(&config(), "https://example.com", html);
        assert_eq!(info.title, "Plain Page");
    }

    #[test]
    fn missing_everything_uses_fallback_strings() {
        let info = extract_web_info(&config(), "https://example.com", "<html></html>");
        assert_eq!(info.title, "Untitled");
        assert_eq!(info.description, "No description available");
    }

    #[test]
    fn description_meta_is_extracted_in_either_attribute_order() {
        let html = r#"<meta content="Reversed order" name="description">"#;
        let info = extract_web_info(&config(), "https://example.com", html);
        assert_eq!(info.description, "Reversed order");

        let html = r#"<meta name="description" content="Normal order">"#;
        let info = extract_web_info(&config(), "https://example.com", html);
        assert_eq!(info.description, "Normal order");
    }

    #[test]
    fn entities_are_decoded() {
        let html = r#"<meta name="description" content="Q&amp;A &quot;site&quot;">"#;
        let info = extract_web_info(&config(), "https://example.com", html);
        assert_eq!(info.description, "Q&A \"site\"");
    }

    #[test]
    fn favicon_uses_first_provider_template() {
        let providers = vec![
            "https://icons.example/{domain}".to_string(),
            "https://{domain}/favicon.ico".to_string(),
        ];
        assert_eq!(
            favicon_url(&providers, "https://github.com/rust-lang"),
            Some("https://icons.example/github.com".to_string())
        );
    }

    #[test]
    fn favicon_is_none_without_a_host() {
        assert_eq!(favicon_url(&["x{domain}".to_string()], "not a url"), None);
    }

    #[test]
    fn guard_rejects_non_http_schemes() {
        assert!(validate_fetch_url("ftp://example.com/file").is_err());
        assert!(validate_fetch_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn guard_rejects_loopback_targets() {
        assert!(validate_fetch_url("http://127.0.0.1:8080/admin").is_err());
        assert!(validate_fetch_url("http://localhost/").is_err());
    }

    #[test]
    fn internal_ranges_are_recognized() {
        assert!(is_internal_ipv4(&Ipv4Addr::new(10, 0, 0, 1)));
        assert!(is_internal_ipv4(&Ipv4Addr::new(192, 168, 1, 1)));
        assert!(is_internal_ipv4(&Ipv4Addr::new(169, 254, 0, 1)));
        assert!(is_internal_ipv4(&Ipv4Addr::new(100, 64, 0, 1)));
        assert!(!is_internal_ipv4(&Ipv4Addr::new(8, 8, 8, 8)));
        assert!(is_internal_ipv6(&Ipv6Addr::LOCALHOST));
    }
}
