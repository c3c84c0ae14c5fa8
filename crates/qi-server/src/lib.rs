//! HTTP server for the QI component registry.
//!
//! This crate provides an axum server exposing one registry through two
//! surfaces:
//! - JSON registry API consumed by install tooling
//! - Server-rendered catalog pages for browsing
//!
//! # Quick Start
//!
//! ```no_run
//! use qi_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         version: "0.1.0".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Routes
//!
//! ```text
//! GET /api/registry            catalog index (also /registry)
//! GET /api/registry/{slug}     component manifest (also /registry/{slug})
//! GET /r/{slug}.json           component manifest, install URL form
//! GET /                        catalog index page (also /components)
//! GET /components/{slug}       component detail page
//! GET /assets/{*path}          stylesheet and scripts
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use qi_registry::Registry;
use qi_site::{FsPreviewSource, NoPreviews, PreviewSource};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Brand shown in page titles.
    pub site_title: String,
    /// Public base URL for registry index entries, without trailing slash.
    pub base_url: String,
    /// Preview fragments directory (`None` shows the fallback everywhere).
    pub previews_dir: Option<PathBuf>,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            site_title: "QI".to_owned(),
            base_url: "https://qi.kanakk.me".to_owned(),
            previews_dir: None,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let previews: Arc<dyn PreviewSource> = match &config.previews_dir {
        Some(dir) => {
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "Preview directory does not exist");
            }
            Arc::new(FsPreviewSource::new(dir.clone()))
        }
        None => Arc::new(NoPreviews),
    };

    let registry = Registry::builtin();
    tracing::info!(components = registry.len(), "Registry loaded");

    let state = Arc::new(AppState {
        registry,
        previews,
        site_title: config.site_title,
        base_url: config.base_url,
        version: config.version,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from QI config.
///
/// # Arguments
///
/// * `config` - QI configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_qi_config(config: &qi_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site_title: config.site.title.clone(),
        base_url: config.site.base_url.clone(),
        previews_dir: config.previews_dir.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_default_qi_config() {
        let config = qi_config::Config::default();
        let server = server_config_from_qi_config(&config, "0.1.0".to_owned());

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 7979);
        assert_eq!(server.site_title, "QI");
        assert_eq!(server.base_url, "https://qi.kanakk.me");
        assert_eq!(server.previews_dir, None);
        assert_eq!(server.version, "0.1.0");
    }

    #[test]
    fn test_server_config_default_matches_qi_config_default() {
        let from_config = server_config_from_qi_config(&qi_config::Config::default(), String::new());
        let default = ServerConfig::default();

        assert_eq!(from_config.host, default.host);
        assert_eq!(from_config.port, default.port);
        assert_eq!(from_config.base_url, default.base_url);
    }
}
