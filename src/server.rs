use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::client::{RainforestClient, MAX_RESULTS};
use crate::config::Config;
use crate::render::render_page;

/// Query used when the visitor submits a blank form or none at all.
pub const DEFAULT_QUERY: &str = "latest xbox";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: RainforestClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/healthz", get(healthz))
        .route("/healthz/{*rest}", get(healthz))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = effective_query(params.q.as_deref());
    let outcome = state.client.search(query, MAX_RESULTS).await;
    info!(
        query,
        results = outcome.results.len(),
        failed = outcome.error.is_some(),
        "search page served"
    );
    let page = render_page(query, &outcome.results, outcome.error.as_ref(), &state.config.amazon_domain);
    // Errors ride inside the page; the status stays 200 for every outcome.
    ([(header::CACHE_CONTROL, "no-store")], Html(page))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Trim the raw `q` parameter; a blank or absent query falls back to
/// [`DEFAULT_QUERY`].
pub fn effective_query(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_QUERY,
    }
}
