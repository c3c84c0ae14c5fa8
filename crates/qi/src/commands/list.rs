//! `qi list` command implementation.

use clap::Args;
use qi_config::CliSettings;
use qi_registry::{Registry, RegistryIndex};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the registry index JSON served at /api/registry.
    #[arg(long)]
    json: bool,

    /// Public base URL used in index URLs (overrides config).
    #[arg(long)]
    base_url: Option<String>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let registry = Registry::builtin();

        if self.json {
            let cli_settings = CliSettings {
                base_url: self.base_url,
                ..CliSettings::default()
            };
            let config = self.config.load(&cli_settings)?;
            let index = RegistryIndex::build(registry, &config.site.base_url);
            output.data(&serde_json::to_string_pretty(&index)?);
            return Ok(());
        }

        let width = registry.slugs().map(str::len).max().unwrap_or(0);
        for summary in registry.list() {
            output.data(&format!(
                "{:<width$}  {:<10}  {}",
                summary.slug,
                summary.record.category.label(),
                output.dim(summary.record.description),
            ));
        }
        output.info(&format!("{} components", registry.len()));
        Ok(())
    }
}
