//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Registry API request for an unknown slug.
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Page request that resolves to nothing; carries the rendered 404 page.
    #[error("Page not found: {path}")]
    PageNotFound {
        /// Requested path.
        path: String,
        /// Rendered not-found document.
        html: String,
    },

    /// Response serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::ComponentNotFound(slug) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({"error": "Component not found", "slug": slug})),
            )
                .into_response(),
            Self::PageNotFound { html, .. } => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Self::Json(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({"error": e.to_string()})),
                )
                    .into_response()
            }
        }
    }
}
