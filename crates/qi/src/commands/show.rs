//! `qi show` command implementation.

use clap::Args;
use qi_config::CliSettings;
use qi_registry::manifest_url;

use super::{ConfigArgs, lookup};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Component slug or published name (e.g. `wave`, `feature-list`).
    slug: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let summary = lookup(&self.slug)?;
        let record = summary.record;
        let config = self.config.load(&CliSettings::default())?;

        output.highlight(&summary.title());
        output.data(record.description);
        output.data("");
        output.data(&format!("Category:   {}", record.category.label()));
        output.data(&format!(
            "Preview:    {} ({})",
            record.preview.module,
            record.preview.export.key()
        ));
        output.data(&format!(
            "Manifest:   {}",
            manifest_url(&config.site.base_url, summary.api_name())
        ));
        output.data(&format!("Install:    {}", record.cli_command));

        output.data("Files:");
        output.data(&format!("  {}", record.registry_path));
        for file in record.extra_files {
            output.data(&format!("  {}", file.path));
        }

        if !record.dependencies.is_empty() {
            output.data(&format!("Depends on: {}", record.dependencies.join(", ")));
        }
        if !record.registry_dependencies.is_empty() {
            output.data(&format!(
                "Registry:   {}",
                record.registry_dependencies.join(", ")
            ));
        }

        match record.steps() {
            Some(steps) => {
                output.data("");
                output.data("Manual steps:");
                for (index, step) in steps.iter().enumerate() {
                    let target = step
                        .filename
                        .map(|name| format!(" ({name})"))
                        .unwrap_or_default();
                    output.data(&format!("  {}. {}{target}", index + 1, step.title));
                }
            }
            None => output.info(&output.dim("No manual steps; copy the source with `qi copy --manual`.")),
        }

        Ok(())
    }
}
