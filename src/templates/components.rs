//! Shared template pieces: text escaping, the page shell, site cards.

use crate::config::Config;
use crate::models::Site;
use crate::web_info::favicon_url;

use super::STYLE;

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a string for embedding inside a single-quoted JS literal.
pub fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}

// ============================================================================
// Page Shell
// ============================================================================

pub fn base_html(title: &str, body: &str, extra_script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}
<script>{extra_script}</script>
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        body = body,
        extra_script = extra_script,
    )
}

// ============================================================================
// Site Cards
// ============================================================================

/// One outbound card on the public listing. The favicon comes from the
/// configured provider template; a broken image swaps to the bundled
/// fallback.
pub fn site_card(config: &Config, site: &Site) -> String {
    let favicon = favicon_url(&config.web_info.favicon.providers, &site.url)
        .unwrap_or_else(|| "/default-favicon.png".to_string());

    format!(
        r#"<a class="site-card" href="{url}" target="_blank" rel="noopener noreferrer">
            <img src="{favicon}" alt="" onerror="this.src='/default-favicon.png'">
            <div>
                <h3>{title}</h3>
                <p>{description}</p>
            </div>
        </a>"#,
        url = html_escape(&site.url),
        favicon = html_escape(&favicon),
        title = html_escape(&site.title),
        description = html_escape(&site.description),
    )
}
