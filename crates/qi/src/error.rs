//! CLI error types.

use qi_config::ConfigError;
use qi_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown component '{0}' (run `qi list` to see available components)")]
    UnknownComponent(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}
