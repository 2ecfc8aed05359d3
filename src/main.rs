//! Linkboard - a personal link directory.
//!
//! This is the main entry point for the web server. The application is
//! organized into the following modules:
//!
//! - `models`: The site record and API payloads
//! - `config`: The read-only configuration object
//! - `store`: Single-key persistence over an embedded sled store
//! - `tags`: Tag derivation and the cascade/reorder transforms
//! - `search`: Local search and external engine URL templating
//! - `web_info`: The metadata-fetch proxy used by the add-site form
//! - `auth`: The admin gate
//! - `handlers`: HTTP route handlers
//! - `templates`: HTML/CSS/JS rendering

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use linkboard::{handlers, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let state = Arc::new(AppState::new());
    let bind = state.config.server.bind.clone();

    let app = Router::new()
        // Public pages
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        // Admin pages
        .route("/admin", get(handlers::admin_page))
        .route("/admin/login", post(handlers::admin_login))
        .route("/admin/logout", post(handlers::admin_logout))
        // Site mutations
        .route("/api/sites", post(handlers::add_site))
        .route("/api/sites/update", post(handlers::update_site))
        .route("/api/sites/delete", post(handlers::delete_sites))
        // Tag mutations
        .route("/api/tags/rename", post(handlers::rename_tag_handler))
        .route("/api/tags/delete", post(handlers::delete_tag_handler))
        .route("/api/tags/order", post(handlers::set_tag_order))
        // Metadata proxy
        .route("/api/fetch-web-info", post(handlers::fetch_web_info_handler))
        // Bundled icons and other static files
        .fallback_service(ServeDir::new("static"))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {bind}: {e}"));

    info!("Linkboard running at http://{bind}");
    axum::serve(listener, app).await.expect("Server error");
}
