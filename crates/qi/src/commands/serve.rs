//! `qi serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use qi_config::CliSettings;
use qi_server::{run_server, server_config_from_qi_config};

use super::{ConfigArgs, block_on};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long, env = "QI_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "QI_PORT")]
    port: Option<u16>,

    /// Public base URL used in registry index URLs (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Directory of preview fragments (overrides config).
    #[arg(long)]
    previews_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            base_url: self.base_url,
            previews_dir: self.previews_dir,
        };
        let config = self.config.load(&cli_settings)?;

        output.highlight(&format!(
            "Serving {} on http://{}:{}",
            config.site.title, config.server.host, config.server.port
        ));
        output.info(&format!("Public URL: {}", config.site.base_url));
        match &config.previews_dir {
            Some(dir) => output.info(&format!("Previews: {}", dir.display())),
            None => output.info("Previews: disabled (no [previews] dir in config)"),
        }

        let server_config = server_config_from_qi_config(&config, version.to_owned());
        block_on(run_server(server_config))?.map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
