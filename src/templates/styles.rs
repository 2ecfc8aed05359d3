//! CSS for both views, embedded in the page shell.

pub const STYLE: &str = r#"
:root {
    --bg: #f9fafb;
    --panel: #ffffff;
    --fg: #111827;
    --muted: #6b7280;
    --border: #e5e7eb;
    --accent: #3b82f6;
    --accent-soft: #eff6ff;
    --danger: #ef4444;
    --radius: 10px;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

a { color: inherit; text-decoration: none; }

.layout { display: flex; min-height: 100vh; }

/* Sidebar */

.sidebar {
    width: 18rem;
    flex-shrink: 0;
    border-right: 1px solid var(--border);
    padding: 1.5rem;
    position: sticky;
    top: 0;
    height: 100vh;
    overflow-y: auto;
}

.sidebar .brand { display: flex; align-items: center; gap: 1rem; margin-bottom: 2rem; }
.sidebar .brand img { width: 2rem; height: 2rem; }
.sidebar .brand h1 { font-size: 1rem; font-weight: 500; }
.sidebar .brand p { font-size: 0.75rem; color: var(--muted); }

.tag-nav button {
    display: flex;
    justify-content: space-between;
    width: 100%;
    text-align: left;
    padding: 0.5rem 1rem;
    border: none;
    border-radius: var(--radius);
    background: none;
    font-size: 0.875rem;
    cursor: pointer;
    margin-bottom: 0.25rem;
}

.tag-nav button:hover { background: var(--panel); }
.tag-nav button.active { background: var(--accent); color: #fff; }
.tag-nav .count { color: var(--muted); font-size: 0.8rem; }
.tag-nav button.active .count { color: #fff; }

/* Main column */

.main { flex: 1; }
.content { max-width: 72rem; margin: 0 auto; padding: 2rem; }

.banner {
    width: 100%;
    background-position: center;
    background-size: cover;
    background-repeat: no-repeat;
}

/* Search bar */

.search-bar { display: flex; gap: 0.5rem; margin-bottom: 3rem; }

.search-bar .engine-pick { position: relative; width: 10rem; flex-shrink: 0; }

.search-bar select {
    width: 100%;
    height: 2.5rem;
    padding-left: 2.75rem;
    appearance: none;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--panel);
    font-size: 0.875rem;
    cursor: pointer;
}

.search-bar .engine-icon {
    position: absolute;
    left: 0.9rem;
    top: 50%;
    transform: translateY(-50%);
    width: 1.25rem;
    height: 1.25rem;
    pointer-events: none;
}

.search-bar input {
    flex: 1;
    height: 2.5rem;
    padding: 0 1rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--panel);
    font-size: 0.875rem;
}

.search-bar button {
    height: 2.5rem;
    padding: 0 1.25rem;
    border: none;
    border-radius: var(--radius);
    background: var(--accent);
    color: #fff;
    font-size: 0.875rem;
    cursor: pointer;
}

/* Site sections */

.tag-section { margin-bottom: 3rem; scroll-margin-top: 2rem; }
.tag-section h2 { font-size: 1.25rem; font-weight: 500; margin-bottom: 1.5rem; }

.site-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 1.5rem;
}

.site-card {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    padding: 1rem;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    transition: box-shadow 0.2s;
}

.site-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
.site-card img { width: 2.5rem; height: 2.5rem; border-radius: 8px; }
.site-card h3 { font-size: 0.875rem; font-weight: 500; margin-bottom: 0.25rem; }
.site-card p {
    font-size: 0.75rem;
    color: var(--muted);
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

.empty-note { color: var(--muted); font-size: 0.875rem; }

/* Admin */

.admin-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.admin-top h1 { font-size: 1.25rem; font-weight: 500; }
.admin-top .actions { display: flex; gap: 0.75rem; align-items: center; }

.btn {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: var(--radius);
    background: var(--accent);
    color: #fff;
    font-size: 0.875rem;
    cursor: pointer;
}

.btn.secondary { background: var(--panel); color: var(--fg); border: 1px solid var(--border); }
.btn.danger { background: var(--danger); }
.btn:hover { opacity: 0.9; }

.link-btn { background: none; border: none; color: var(--muted); font-size: 0.875rem; cursor: pointer; }
.link-btn:hover { color: var(--fg); }

.admin-body { display: flex; gap: 1.5rem; align-items: flex-start; }

.tag-panel {
    width: 16rem;
    flex-shrink: 0;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem;
}

.tag-panel h2 { font-size: 1rem; font-weight: 500; margin-bottom: 1rem; }

.tag-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.75rem;
    border-radius: var(--radius);
    margin-bottom: 0.25rem;
    font-size: 0.875rem;
}

.tag-row:hover { background: var(--bg); }
.tag-row.selected { background: var(--accent-soft); color: var(--accent); }
.tag-row.dragging { opacity: 0.5; }
.tag-row .name { flex: 1; cursor: pointer; }
.tag-row .count { color: var(--muted); font-size: 0.8rem; }
.tag-row .grip { color: var(--muted); cursor: move; }
.tag-row .icon-btn { background: none; border: none; color: var(--muted); cursor: pointer; font-size: 0.8rem; }
.tag-row .icon-btn:hover { color: var(--fg); }
.tag-row .icon-btn.delete:hover { color: var(--danger); }
.tag-row input { flex: 1; min-width: 0; padding: 0.2rem 0.4rem; font-size: 0.875rem; border: 1px solid var(--border); border-radius: 4px; }

.site-panel {
    flex: 1;
    background: var(--panel);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem;
}

.admin-search { width: 100%; padding: 0.5rem 1rem; margin-bottom: 1rem; border: 1px solid var(--border); border-radius: var(--radius); font-size: 0.875rem; }

.bulk-bar {
    display: none;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    font-size: 0.875rem;
    color: var(--muted);
}

.bulk-bar.active { display: flex; }

.site-row {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 1rem;
    background: var(--bg);
    border-radius: var(--radius);
    margin-bottom: 0.75rem;
}

.site-row .body { flex: 1; min-width: 0; }
.site-row h3 { font-size: 0.9rem; font-weight: 500; }
.site-row .url { font-size: 0.75rem; color: var(--muted); word-break: break-all; }
.site-row p { font-size: 0.8rem; color: var(--muted); margin: 0.25rem 0 0.5rem; }

.chip {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.1rem 0.6rem;
    border-radius: 999px;
    background: var(--accent-soft);
    color: var(--accent);
    font-size: 0.7rem;
    margin-right: 0.25rem;
}

.chip button { background: none; border: none; color: inherit; cursor: pointer; font-size: 0.7rem; }

/* Modal */

.modal-overlay {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0,0,0,0.5);
    z-index: 50;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.modal-overlay.active { display: flex; }

.modal { width: 100%; max-width: 28rem; background: var(--panel); border-radius: var(--radius); }
.modal header { display: flex; justify-content: space-between; align-items: center; padding: 1rem; border-bottom: 1px solid var(--border); }
.modal header h2 { font-size: 1rem; font-weight: 500; }
.modal form { padding: 1rem; }
.modal .field { margin-bottom: 1rem; }
.modal label { display: block; font-size: 0.8rem; font-weight: 500; margin-bottom: 0.25rem; }
.modal input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--border); border-radius: var(--radius); font-size: 0.875rem; }
.modal .tag-entry { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.modal .tag-entry input { flex: 1; }
.modal footer { display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1.5rem; }
.modal .loading { font-size: 0.75rem; color: var(--muted); display: none; }
.modal .loading.active { display: inline; }

/* Login */

.login-wrap { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.login-box { width: 100%; max-width: 20rem; background: var(--panel); border: 1px solid var(--border); border-radius: var(--radius); padding: 1.5rem; }
.login-box h1 { font-size: 1.1rem; font-weight: 500; text-align: center; margin-bottom: 1.5rem; }
.login-box input { width: 100%; padding: 0.5rem 0.75rem; border: 1px solid var(--border); border-radius: var(--radius); margin-bottom: 1rem; }
.login-box .error { color: var(--danger); font-size: 0.8rem; margin-bottom: 1rem; }
.login-box button { width: 100%; }
.login-box .back { display: block; text-align: center; font-size: 0.8rem; color: var(--muted); margin-top: 1rem; }
"#;
