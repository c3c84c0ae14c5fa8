//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod copy;
pub(crate) mod list;
pub(crate) mod serve;
pub(crate) mod show;

use std::path::PathBuf;

use clap::Args;
use qi_config::{CliSettings, Config};
use qi_registry::{Registry, Summary};

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use copy::CopyArgs;
pub(crate) use list::ListArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use show::ShowArgs;

use crate::error::CliError;

/// Config file selection shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover qi.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration with the given overrides.
    pub(crate) fn load(&self, settings: &CliSettings) -> Result<Config, CliError> {
        Ok(Config::load(self.config.as_deref(), Some(settings))?)
    }
}

/// Resolve a slug or published name against the built-in registry.
pub(crate) fn lookup(name: &str) -> Result<Summary<'static>, CliError> {
    Registry::builtin()
        .get_published(name)
        .ok_or_else(|| CliError::UnknownComponent(name.to_owned()))
}

/// Run a future to completion on a fresh multi-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(future))
}
