//! The public listing view: tag-grouped sections, sidebar index, search bar
//! with engine dispatch, and scroll-spy highlighting.

use crate::config::Config;
use crate::models::{SearchEngine, Site};
use crate::search::engine_favicon;
use crate::tags::filter_by_tag;

use super::components::{base_html, html_escape, site_card};

/// Element-id-safe form of a tag name. Tags may contain spaces, which are
/// not valid in DOM ids; percent-encoding is, and it is computed here once
/// so the page script only ever compares precomputed ids.
fn dom_id(tag: &str) -> String {
    urlencoding::encode(tag).into_owned()
}

// ============================================================================
// Index Page
// ============================================================================

pub fn render_index(
    config: &Config,
    sites: &[Site],
    ordered_tags: &[String],
    engines: &[SearchEngine],
) -> String {
    let sidebar = sidebar_html(config, sites, ordered_tags);
    let banner = banner_html(config);
    let search_bar = search_bar_html(config, engines, "");

    let mut sections = String::new();
    for tag in ordered_tags {
        let tagged = filter_by_tag(sites, tag);
        if tagged.is_empty() {
            continue;
        }
        let cards: String = tagged.iter().map(|s| site_card(config, s)).collect();
        sections.push_str(&format!(
            r#"<section class="tag-section" id="section-{id}" data-tag="{id}">
                <h2>{title}</h2>
                <div class="site-grid">{cards}</div>
            </section>"#,
            id = dom_id(tag),
            title = html_escape(tag),
            cards = cards,
        ));
    }
    if sections.is_empty() {
        sections.push_str(r#"<p class="empty-note">No sites yet.</p>"#);
    }

    let body = format!(
        r#"<div class="layout">
            {sidebar}
            <div class="main">
                {banner}
                <div class="content">
                    {search_bar}
                    {sections}
                </div>
            </div>
        </div>"#,
    );

    base_html(&config.site.title, &body, PUBLIC_SCRIPT)
}

fn sidebar_html(config: &Config, sites: &[Site], ordered_tags: &[String]) -> String {
    let sidebar = &config.site.sidebar;

    let logo = if sidebar.show_logo {
        format!(
            r#"<img src="{}" alt="">"#,
            html_escape(&config.site.logo)
        )
    } else {
        String::new()
    };
    let title = if sidebar.show_title {
        format!("<h1>{}</h1>", html_escape(&config.site.title))
    } else {
        String::new()
    };
    let description = if sidebar.show_description {
        format!("<p>{}</p>", html_escape(&config.site.description))
    } else {
        String::new()
    };

    let mut nav = String::from(r#"<div class="tag-nav">"#);
    for tag in ordered_tags {
        nav.push_str(&format!(
            r#"<button data-tag="{id}" onclick="jumpToTag('{id}')">
                <span>{label}</span><span class="count">{count}</span>
            </button>"#,
            id = dom_id(tag),
            label = html_escape(tag),
            count = filter_by_tag(sites, tag).len(),
        ));
    }
    nav.push_str("</div>");

    format!(
        r#"<aside class="sidebar">
            <div class="brand">{logo}<div>{title}{description}</div></div>
            {nav}
        </aside>"#,
    )
}

fn banner_html(config: &Config) -> String {
    let banner = &config.site.banner;
    if !banner.show || banner.image.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="banner" style="height: {height}; background-image: url('{image}')"></div>"#,
        height = html_escape(&banner.height),
        image = html_escape(&banner.image),
    )
}

fn search_bar_html(config: &Config, engines: &[SearchEngine], query: &str) -> String {
    let provider = config
        .web_info
        .favicon
        .providers
        .first()
        .cloned()
        .unwrap_or_default();

    let mut options = String::new();
    for (i, engine) in engines.iter().enumerate() {
        options.push_str(&format!(
            r#"<option value="{i}" data-url="{url}" data-icon="{icon}">{name}</option>"#,
            url = html_escape(&engine.search_url),
            icon = html_escape(&engine_favicon(engine, &provider)),
            name = html_escape(&engine.name),
        ));
    }

    let first_icon = engines
        .first()
        .map(|e| engine_favicon(e, &provider))
        .unwrap_or_else(|| "/favicon.png".to_string());

    format!(
        r#"<form class="search-bar" id="search-form" action="/search" method="get">
            <div class="engine-pick">
                <select id="engine-select" onchange="engineChanged()">{options}</select>
                <img class="engine-icon" id="engine-icon" src="{icon}" alt=""
                     onerror="this.src='/favicon.png'">
            </div>
            <input type="text" name="q" id="search-input" placeholder="Search..." value="{query}">
            <button type="submit">Search</button>
        </form>"#,
        icon = html_escape(&first_icon),
        query = html_escape(query),
    )
}

// ============================================================================
// Search Results Page
// ============================================================================

pub fn render_search_results(
    config: &Config,
    engines: &[SearchEngine],
    query: &str,
    hits: &[&Site],
) -> String {
    let search_bar = search_bar_html(config, engines, query);

    let results = if hits.is_empty() {
        r#"<p class="empty-note">No matching sites.</p>"#.to_string()
    } else {
        let cards: String = hits.iter().map(|s| site_card(config, s)).collect();
        format!(r#"<div class="site-grid">{cards}</div>"#)
    };

    let body = format!(
        r#"<div class="layout">
            <div class="main">
                <div class="content">
                    <p style="margin-bottom: 1rem"><a href="/">&larr; Back</a></p>
                    {search_bar}
                    <h2 style="margin-bottom: 1.5rem">Results for &quot;{q}&quot; ({n})</h2>
                    {results}
                </div>
            </div>
        </div>"#,
        q = html_escape(query),
        n = hits.len(),
    );

    base_html(
        &format!("Search: {} - {}", query, config.site.title),
        &body,
        PUBLIC_SCRIPT,
    )
}

// ============================================================================
// Page Script
// ============================================================================

/// Engine dispatch, sidebar jumps, and scroll-spy. External engines open a
/// new tab with the templated query and leave the displayed list alone;
/// the local engine submits the form to `/search`.
const PUBLIC_SCRIPT: &str = r#"
function selectedEngine() {
    const select = document.getElementById('engine-select');
    if (!select) return null;
    return select.options[select.selectedIndex];
}

function engineChanged() {
    const option = selectedEngine();
    if (!option) return;
    document.getElementById('engine-icon').src = option.dataset.icon;
}

const form = document.getElementById('search-form');
if (form) {
    form.addEventListener('submit', function (e) {
        const option = selectedEngine();
        const query = document.getElementById('search-input').value.trim();
        if (!query) { e.preventDefault(); return; }
        if (option && option.dataset.url !== 'local') {
            e.preventDefault();
            const url = option.dataset.url.replace('{query}', encodeURIComponent(query));
            window.open(url, '_blank', 'noopener,noreferrer');
        }
    });
}

function jumpToTag(tag) {
    const section = document.getElementById('section-' + tag);
    if (section) {
        section.scrollIntoView({ behavior: 'smooth' });
        setActiveTag(tag);
    }
}

function setActiveTag(tag) {
    document.querySelectorAll('.tag-nav button').forEach(function (b) {
        b.classList.toggle('active', b.dataset.tag === tag);
    });
}

// Mark the section crossing a fixed 100px viewport offset as active.
window.addEventListener('scroll', function () {
    let current = null;
    document.querySelectorAll('.tag-section').forEach(function (section) {
        const rect = section.getBoundingClientRect();
        if (rect.top <= 100 && rect.bottom >= 100) current = section.dataset.tag;
    });
    if (current !== null) setActiveTag(current);
});
"#;
