//! Registry API endpoints.
//!
//! Serve the catalog index and per-component manifests as JSON. Both are
//! read-only projections of the registry and are deterministic for a given
//! build.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use qi_registry::{ComponentManifest, RegistryIndex};

use crate::error::ServerError;
use crate::handlers::cached_json;
use crate::state::AppState;

/// File suffix of the `/r/{slug}.json` install URLs.
const JSON_SUFFIX: &str = ".json";

/// Handle GET /api/registry.
pub(crate) async fn get_index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let index = RegistryIndex::build(state.registry, &state.base_url);
    let body = serde_json::to_string(&index)?;
    Ok(cached_json(&state.version, body, &headers))
}

/// Handle GET /api/registry/{slug}.
pub(crate) async fn get_component(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    manifest_response(&state, &slug, &headers)
}

/// Handle GET /r/{slug}.json.
pub(crate) async fn get_component_file(
    Path(file): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    let Some(slug) = file.strip_suffix(JSON_SUFFIX) else {
        return Err(ServerError::ComponentNotFound(file));
    };
    manifest_response(&state, slug, &headers)
}

fn manifest_response(
    state: &AppState,
    slug: &str,
    headers: &HeaderMap,
) -> Result<axum::response::Response, ServerError> {
    let manifest = ComponentManifest::lookup(state.registry, slug)
        .ok_or_else(|| ServerError::ComponentNotFound(slug.to_owned()))?;
    let body = serde_json::to_string(&manifest)?;
    Ok(cached_json(&state.version, body, headers))
}
