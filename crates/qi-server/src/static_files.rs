//! Static asset serving.
//!
//! Serves the stylesheet and scripts under `/assets/`. Uses `qi-assets` for
//! retrieval in both embedded and filesystem modes.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Cache policy for assets.
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Handle GET /assets/{*path}.
pub(crate) async fn serve_asset(Path(path): Path<String>) -> Response {
    let Some(content) = qi_assets::get(&path) else {
        tracing::debug!(path = %path, "Asset not found");
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        [
            (header::CONTENT_TYPE, qi_assets::mime_for(&path)),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_owned()),
        ],
        content.into_owned(),
    )
        .into_response()
}
