//! HTTP route handlers.
//!
//! Page handlers render the public listing, the local search results, and
//! the admin panel; the JSON handlers carry the admin mutations and the
//! metadata proxy. Every mutation reads the full collection through the
//! Site Store, applies a pure transform, and writes the whole collection
//! back.

use crate::auth::{is_admin, login_cookie, logout_cookie, password_matches};
use crate::error::AppError;
use crate::models::{
    DeleteSitesRequest, DeleteTagRequest, FetchWebInfoRequest, OkResponse, RenameTagRequest,
    Site, TagOrderRequest, UpdateSiteRequest, WebInfo,
};
use crate::search::search_sites;
use crate::tags::{
    all_tags, is_pseudo_tag, delete_tag, remove_from_order, rename_in_order, rename_tag,
    sidebar_order, TagError, TAG_ALL,
};
use crate::templates::{render_admin, render_index, render_login, render_search_results};
use crate::web_info::fetch_web_info;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Public Pages
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let sites = state.store.list();
    let derived = all_tags(&sites);
    let ordered = sidebar_order(&derived, state.store.tag_order().as_deref());

    Html(render_index(
        &state.config,
        &sites,
        &ordered,
        &state.config.engines(),
    ))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let q = query.q.unwrap_or_default();
    let sites = state.store.list();
    let hits = search_sites(&sites, &q);

    Html(render_search_results(
        &state.config,
        &state.config.engines(),
        &q,
        &hits,
    ))
}

// ============================================================================
// Admin Pages
// ============================================================================

#[derive(Deserialize)]
pub struct AdminQuery {
    pub tag: Option<String>,
}

pub async fn admin_page(
    Query(query): Query<AdminQuery>,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Html<String> {
    if !is_admin(&jar) {
        return Html(render_login(&state.config, None));
    }

    let sites = state.store.list();
    let derived = all_tags(&sites);
    let ordered = sidebar_order(&derived, state.store.tag_order().as_deref());
    let selected = query.tag.unwrap_or_else(|| TAG_ALL.to_string());

    Html(render_admin(&state.config, &sites, &ordered, &selected))
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    if !password_matches(&form.password, &state.config.admin.password) {
        warn!("Admin login rejected");
        return Html(render_login(&state.config, Some("Wrong password"))).into_response();
    }

    info!("Admin login accepted");
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, login_cookie().parse().expect("valid cookie"));
    (headers, Redirect::to("/admin")).into_response()
}

pub async fn admin_logout() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, logout_cookie().parse().expect("valid cookie"));
    (headers, Redirect::to("/")).into_response()
}

fn require_admin(jar: &CookieJar) -> Result<(), AppError> {
    if is_admin(jar) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

// ============================================================================
// Site Mutations
// ============================================================================

fn validate_site(site: &Site) -> Result<(), AppError> {
    if site.title.trim().is_empty()
        || site.description.trim().is_empty()
        || site.url.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Title, description, and URL are required".to_string(),
        ));
    }
    Ok(())
}

pub async fn add_site(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(site): Json<Site>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;
    validate_site(&site)?;

    info!("Adding site {}", site.url);
    state.store.add(site);
    Ok(Json(OkResponse::ok()))
}

pub async fn update_site(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<UpdateSiteRequest>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;
    validate_site(&request.site)?;

    info!("Updating site {}", request.original_url);
    state.store.update(&request.original_url, request.site);
    Ok(Json(OkResponse::ok()))
}

pub async fn delete_sites(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<DeleteSitesRequest>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;

    info!("Deleting {} site(s)", request.urls.len());
    state.store.delete_many(&request.urls);
    Ok(Json(OkResponse::ok()))
}

// ============================================================================
// Tag Mutations
// ============================================================================

pub async fn rename_tag_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<RenameTagRequest>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;
    if request.new.trim().is_empty() {
        return Err(AppError::Validation("Tag name is required".to_string()));
    }
    if is_pseudo_tag(&request.new) {
        return Err(AppError::Validation(format!(
            "'{}' is a reserved name",
            request.new
        )));
    }

    let sites = state.store.list();
    let renamed = match rename_tag(&sites, &request.old, &request.new) {
        Ok(renamed) => renamed,
        Err(TagError::NameCollision(name)) => return Err(AppError::TagCollision(name)),
    };

    info!("Renaming tag '{}' to '{}'", request.old, request.new);
    state.store.replace_all(&renamed);
    if let Some(order) = state.store.tag_order() {
        state
            .store
            .set_tag_order(&rename_in_order(&order, &request.old, &request.new));
    }
    Ok(Json(OkResponse::ok()))
}

pub async fn delete_tag_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<DeleteTagRequest>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;

    let sites = state.store.list();
    info!("Deleting tag '{}'", request.tag);
    state.store.replace_all(&delete_tag(&sites, &request.tag));
    if let Some(order) = state.store.tag_order() {
        state
            .store
            .set_tag_order(&remove_from_order(&order, &request.tag));
    }
    Ok(Json(OkResponse::ok()))
}

pub async fn set_tag_order(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<TagOrderRequest>,
) -> Result<Json<OkResponse>, AppError> {
    require_admin(&jar)?;
    if request.order.iter().any(|t| is_pseudo_tag(t)) {
        return Err(AppError::Validation(
            "Virtual filters cannot be reordered".to_string(),
        ));
    }

    state.store.set_tag_order(&request.order);
    Ok(Json(OkResponse::ok()))
}

// ============================================================================
// Metadata Proxy
// ============================================================================

/// `POST /api/fetch-web-info`. Fetches the caller-supplied URL and returns
/// extracted metadata; any failure collapses to a generic 500 body with no
/// retry and no partial result.
pub async fn fetch_web_info_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchWebInfoRequest>,
) -> Result<Json<WebInfo>, AppError> {
    match fetch_web_info(&state.config.web_info, &request.url).await {
        Some(info) => Ok(Json(info)),
        None => {
            warn!("Web info fetch failed for {}", request.url);
            Err(AppError::FetchFailed)
        }
    }
}
