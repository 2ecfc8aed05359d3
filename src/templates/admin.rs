//! The admin panel: login form, tag management sidebar, site rows with
//! bulk selection, and the add/edit modal with URL-blur autofill.

use crate::config::Config;
use crate::models::Site;
use crate::tags::{filter_by_tag, site_count, TAG_ALL, TAG_UNCATEGORIZED};

use super::components::{base_html, html_escape, js_escape};

// ============================================================================
// Login
// ============================================================================

pub fn render_login(config: &Config, error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, html_escape(msg)),
        None => String::new(),
    };

    let body = format!(
        r#"<div class="login-wrap">
            <div class="login-box">
                <h1>Admin Login</h1>
                <form method="POST" action="/admin/login">
                    <input type="password" name="password" placeholder="Password" autofocus required>
                    {error_html}
                    <button class="btn" type="submit">Log in</button>
                </form>
                <a class="back" href="/">Back to directory</a>
            </div>
        </div>"#,
    );

    base_html(&format!("Admin - {}", config.site.title), &body, "")
}

// ============================================================================
// Admin Panel
// ============================================================================

pub fn render_admin(
    config: &Config,
    sites: &[Site],
    ordered_tags: &[String],
    selected_tag: &str,
) -> String {
    let tag_panel = tag_panel_html(sites, ordered_tags, selected_tag);
    let site_panel = site_panel_html(sites, selected_tag);

    let body = format!(
        r#"<div class="content">
            <div class="admin-top">
                <div style="display: flex; gap: 1rem; align-items: center">
                    <a href="/">&larr; Back</a>
                    <h1>Site Management</h1>
                </div>
                <div class="actions">
                    <form method="POST" action="/admin/logout" style="display: inline">
                        <button class="link-btn" type="submit">Log out</button>
                    </form>
                    <button class="btn" onclick="openAddModal()">+ Add Site</button>
                </div>
            </div>

            <input class="admin-search" id="admin-search" type="text"
                   placeholder="Filter sites..." oninput="filterRows()">

            <div class="bulk-bar" id="bulk-bar">
                <span id="bulk-count"></span>
                <button class="link-btn" style="color: var(--danger)" onclick="bulkDelete()">Delete selected</button>
            </div>

            <div class="admin-body">
                {tag_panel}
                {site_panel}
            </div>
        </div>
        {modal}"#,
        modal = modal_html(),
    );

    // "</" must not appear literally inside a script element; "\/" is a
    // legal JSON escape so the payload stays valid.
    let sites_json = serde_json::to_string(sites)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    let prelude = format!(
        "const SITES = {sites_json};\nconst SELECTED_TAG = '{selected}';\n",
        selected = js_escape(selected_tag),
    );
    let script = format!("{prelude}{ADMIN_SCRIPT}");

    base_html(&format!("Admin - {}", config.site.title), &body, &script)
}

fn tag_panel_html(sites: &[Site], ordered_tags: &[String], selected_tag: &str) -> String {
    let mut html = String::from(r#"<div class="tag-panel"><h2>Tags</h2>"#);

    // The two virtual filters live outside the orderable list: they are not
    // draggable and never valid drop targets.
    for (pseudo, label) in [(TAG_ALL, "All"), (TAG_UNCATEGORIZED, "Uncategorized")] {
        let selected = if selected_tag == pseudo { " selected" } else { "" };
        html.push_str(&format!(
            r#"<div class="tag-row{selected}">
                <span class="name" onclick="selectTag('{pseudo}')">{label}</span>
                <span class="count">{count}</span>
            </div>"#,
            count = site_count(sites, pseudo),
        ));
    }

    html.push_str(r#"<div id="tag-list">"#);
    for tag in ordered_tags {
        let selected = if selected_tag == tag { " selected" } else { "" };
        html.push_str(&format!(
            r#"<div class="tag-row{selected}" draggable="true" data-tag="{attr}">
                <span class="grip">&#x2630;</span>
                <span class="name" onclick="selectTag('{js}')">{label}</span>
                <span class="count">{count}</span>
                <button class="icon-btn" onclick="startEditTag(this)" title="Rename">&#x270E;</button>
                <button class="icon-btn delete" onclick="deleteTag('{js}')" title="Delete">&#x2715;</button>
            </div>"#,
            attr = html_escape(tag),
            js = js_escape(tag),
            label = html_escape(tag),
            count = site_count(sites, tag),
        ));
    }
    html.push_str("</div></div>");
    html
}

fn site_panel_html(sites: &[Site], selected_tag: &str) -> String {
    let filtered = filter_by_tag(sites, selected_tag);

    let mut html = String::from(r#"<div class="site-panel">"#);
    if filtered.is_empty() {
        html.push_str(r#"<p class="empty-note">No sites under this filter.</p>"#);
    }
    for site in filtered {
        let chips: String = site
            .tags
            .iter()
            .map(|t| format!(r#"<span class="chip">{}</span>"#, html_escape(t)))
            .collect();
        html.push_str(&format!(
            r#"<div class="site-row">
                <input type="checkbox" class="row-check" data-url="{attr_url}" onchange="selectionChanged()">
                <div class="body">
                    <h3>{title}</h3>
                    <span class="url">{url}</span>
                    <p>{description}</p>
                    <div>{chips}</div>
                </div>
                <button class="icon-btn" onclick="openEditModal('{js_url}')" title="Edit">&#x270E;</button>
                <button class="icon-btn delete" onclick="deleteOne('{js_url}')" title="Delete">&#x2715;</button>
            </div>"#,
            attr_url = html_escape(&site.url),
            title = html_escape(&site.title),
            url = html_escape(&site.url),
            description = html_escape(&site.description),
            js_url = js_escape(&site.url),
        ));
    }
    html.push_str("</div>");
    html
}

fn modal_html() -> String {
    r#"<div class="modal-overlay" id="site-modal">
        <div class="modal">
            <header>
                <h2 id="modal-title">Add Site</h2>
                <button class="icon-btn" onclick="closeModal()">&#x2715;</button>
            </header>
            <form onsubmit="return submitSite(event)">
                <div class="field">
                    <label for="f-title">Title</label>
                    <input type="text" id="f-title">
                </div>
                <div class="field">
                    <label for="f-description">Description</label>
                    <input type="text" id="f-description">
                </div>
                <div class="field">
                    <label for="f-url">URL <span class="loading" id="f-loading">fetching&hellip;</span></label>
                    <input type="url" id="f-url" onblur="autofillFromUrl()">
                </div>
                <div class="field">
                    <label for="f-tag">Tags</label>
                    <div class="tag-entry">
                        <input type="text" id="f-tag" list="known-tags">
                        <button type="button" class="btn secondary" onclick="addFormTag()">Add</button>
                    </div>
                    <datalist id="known-tags"></datalist>
                    <div id="f-chips"></div>
                </div>
                <footer>
                    <button type="button" class="btn secondary" onclick="closeModal()">Cancel</button>
                    <button type="submit" class="btn">Save</button>
                </footer>
            </form>
        </div>
    </div>"#
        .to_string()
}

// ============================================================================
// Page Script
// ============================================================================

/// Everything interactive on the admin page. Mutations POST to the JSON API
/// and reload; filter selection travels in the `tag` query parameter so a
/// rename or delete can move the selection along with the cascade.
const ADMIN_SCRIPT: &str = r#"
let editingTag = null;
let draggedRow = null;
let modalTags = [];
let editingOriginalUrl = null;

async function post(path, payload) {
    const response = await fetch(path, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload),
    });
    if (!response.ok) {
        let message = 'Request failed';
        try { message = (await response.json()).error || message; } catch (e) {}
        throw new Error(message);
    }
    return response.json();
}

function selectTag(tag) {
    location.href = '/admin?tag=' + encodeURIComponent(tag);
}

// --- tag drag reorder -------------------------------------------------------

const tagList = document.getElementById('tag-list');

tagList.querySelectorAll('.tag-row').forEach(function (row) {
    row.addEventListener('dragstart', function (e) {
        if (editingTag !== null) { e.preventDefault(); return; }
        draggedRow = row;
        row.classList.add('dragging');
    });
    row.addEventListener('dragover', function (e) {
        // Rows outside #tag-list (the two virtual filters) never get here,
        // so a drop onto them is implicitly rejected.
        e.preventDefault();
        if (!draggedRow || draggedRow === row) return;
        const rows = Array.from(tagList.children);
        const from = rows.indexOf(draggedRow);
        const to = rows.indexOf(row);
        if (from < to) row.after(draggedRow); else row.before(draggedRow);
    });
    row.addEventListener('dragend', async function () {
        row.classList.remove('dragging');
        draggedRow = null;
        const order = Array.from(tagList.children).map(function (r) { return r.dataset.tag; });
        try { await post('/api/tags/order', { order: order }); } catch (e) { alert(e.message); }
    });
});

// --- tag rename / delete ----------------------------------------------------

function startEditTag(button) {
    if (editingTag !== null) return;
    const row = button.closest('.tag-row');
    const tag = row.dataset.tag;
    editingTag = tag;

    const name = row.querySelector('.name');
    const input = document.createElement('input');
    input.type = 'text';
    input.value = tag;
    input.addEventListener('keydown', function (e) {
        if (e.key === 'Enter') { e.preventDefault(); finishRename(tag, input.value); }
        if (e.key === 'Escape') location.reload();
    });
    name.replaceWith(input);
    input.focus();
}

async function finishRename(oldTag, newTag) {
    newTag = newTag.trim();
    if (!newTag || newTag === oldTag) { location.reload(); return; }
    try {
        await post('/api/tags/rename', { old: oldTag, new: newTag });
        if (SELECTED_TAG === oldTag) {
            selectTag(newTag);
        } else {
            location.reload();
        }
    } catch (e) {
        alert(e.message);
        location.reload();
    }
}

async function deleteTag(tag) {
    if (!confirm('Delete tag "' + tag + '"? Sites keep their other tags.')) return;
    try {
        await post('/api/tags/delete', { tag: tag });
        if (SELECTED_TAG === tag) {
            selectTag('all');
        } else {
            location.reload();
        }
    } catch (e) {
        alert(e.message);
    }
}

// --- site selection / deletion ----------------------------------------------

function checkedUrls() {
    return Array.from(document.querySelectorAll('.row-check:checked'))
        .map(function (c) { return c.dataset.url; });
}

function selectionChanged() {
    const urls = checkedUrls();
    const bar = document.getElementById('bulk-bar');
    bar.classList.toggle('active', urls.length > 0);
    document.getElementById('bulk-count').textContent = urls.length + ' selected';
}

async function bulkDelete() {
    const urls = checkedUrls();
    if (urls.length === 0) return;
    if (!confirm('Delete ' + urls.length + ' selected site(s)? This cannot be undone.')) return;
    try { await post('/api/sites/delete', { urls: urls }); location.reload(); }
    catch (e) { alert(e.message); }
}

async function deleteOne(url) {
    try { await post('/api/sites/delete', { urls: [url] }); location.reload(); }
    catch (e) { alert(e.message); }
}

function filterRows() {
    const query = document.getElementById('admin-search').value.toLowerCase();
    document.querySelectorAll('.site-row').forEach(function (row) {
        row.style.display = row.textContent.toLowerCase().includes(query) ? '' : 'none';
    });
}

// --- add / edit modal -------------------------------------------------------

function knownTags() {
    const set = new Set();
    SITES.forEach(function (s) { s.tags.forEach(function (t) { set.add(t); }); });
    return Array.from(set).sort();
}

function renderModalTags() {
    const chips = document.getElementById('f-chips');
    chips.innerHTML = '';
    modalTags.forEach(function (tag) {
        const chip = document.createElement('span');
        chip.className = 'chip';
        chip.textContent = tag + ' ';
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.textContent = '✕';
        remove.onclick = function () {
            modalTags = modalTags.filter(function (t) { return t !== tag; });
            renderModalTags();
        };
        chip.appendChild(remove);
        chips.appendChild(chip);
    });

    const datalist = document.getElementById('known-tags');
    datalist.innerHTML = '';
    knownTags().forEach(function (tag) {
        const option = document.createElement('option');
        option.value = tag;
        datalist.appendChild(option);
    });
}

function addFormTag() {
    const input = document.getElementById('f-tag');
    const tag = input.value.trim();
    if (!tag) return;
    if (modalTags.includes(tag)) { alert('Tag already added'); return; }
    modalTags.push(tag);
    input.value = '';
    renderModalTags();
}

function openAddModal() {
    editingOriginalUrl = null;
    modalTags = [];
    document.getElementById('modal-title').textContent = 'Add Site';
    ['f-title', 'f-description', 'f-url', 'f-tag'].forEach(function (id) {
        document.getElementById(id).value = '';
    });
    renderModalTags();
    document.getElementById('site-modal').classList.add('active');
}

function openEditModal(url) {
    const site = SITES.find(function (s) { return s.url === url; });
    if (!site) return;
    editingOriginalUrl = url;
    modalTags = site.tags.slice();
    document.getElementById('modal-title').textContent = 'Edit Site';
    document.getElementById('f-title').value = site.title;
    document.getElementById('f-description').value = site.description;
    document.getElementById('f-url').value = site.url;
    document.getElementById('f-tag').value = '';
    renderModalTags();
    document.getElementById('site-modal').classList.add('active');
}

function closeModal() {
    document.getElementById('site-modal').classList.remove('active');
}

// Autofill title/description from the metadata proxy when the URL field
// loses focus. Skipped while editing; failures leave the fields as they are.
async function autofillFromUrl() {
    const url = document.getElementById('f-url').value.trim();
    if (!url || editingOriginalUrl !== null) return;

    const loading = document.getElementById('f-loading');
    loading.classList.add('active');
    try {
        const info = await post('/api/fetch-web-info', { url: url });
        const title = document.getElementById('f-title');
        const description = document.getElementById('f-description');
        if (info.title && !title.value) title.value = info.title;
        if (info.description && !description.value) description.value = info.description;
    } catch (e) {
        console.log('Web info fetch failed:', e.message);
    } finally {
        loading.classList.remove('active');
    }
}

async function submitSite(event) {
    event.preventDefault();
    const site = {
        title: document.getElementById('f-title').value.trim(),
        description: document.getElementById('f-description').value.trim(),
        url: document.getElementById('f-url').value.trim(),
        tags: modalTags,
    };
    if (!site.title || !site.description || !site.url) {
        alert('Title, description, and URL are all required');
        return false;
    }
    try {
        if (editingOriginalUrl !== null) {
            await post('/api/sites/update', { original_url: editingOriginalUrl, site: site });
        } else {
            await post('/api/sites', site);
        }
        location.reload();
    } catch (e) {
        alert(e.message);
    }
    return false;
}
"#;
