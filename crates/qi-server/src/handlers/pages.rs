//! Server-rendered catalog pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use qi_site::PageOutcome;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / and GET /components.
pub(crate) async fn get_index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.pages().index())
}

/// Handle GET /components/{slug}.
pub(crate) async fn get_component(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    match state
        .pages()
        .render(Some(&slug), state.previews.as_ref())
        .await
    {
        PageOutcome::Found(html) => Ok(Html(html)),
        PageOutcome::NotFound(html) => Err(ServerError::PageNotFound {
            path: format!("/components/{slug}"),
            html,
        }),
    }
}

/// Fallback for unmatched routes.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> ServerError {
    tracing::debug!(path = %uri.path(), "No route");
    ServerError::PageNotFound {
        path: uri.path().to_owned(),
        html: state.pages().not_found(),
    }
}
