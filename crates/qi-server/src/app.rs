//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // Registry API (legacy unprefixed paths kept for existing install URLs)
    let api_routes = Router::new()
        .route("/api/registry", get(handlers::registry::get_index))
        .route("/api/registry/{slug}", get(handlers::registry::get_component))
        .route("/registry", get(handlers::registry::get_index))
        .route("/registry/{slug}", get(handlers::registry::get_component))
        .route("/r/{file}", get(handlers::registry::get_component_file));

    let page_routes = Router::new()
        .route("/", get(handlers::pages::get_index))
        .route("/components", get(handlers::pages::get_index))
        .route("/components/{slug}", get(handlers::pages::get_component));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .route("/assets/{*path}", get(static_files::serve_asset))
        .fallback(handlers::pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::header_layer(security::POLICY[0]))
                .layer(security::header_layer(security::POLICY[1]))
                .layer(security::header_layer(security::POLICY[2])),
        )
        .with_state(state)
}
