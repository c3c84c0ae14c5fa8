//! `qi check` command implementation.

use clap::Args;
use qi_config::CliSettings;
use qi_registry::Registry;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(&CliSettings::default())?;
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {} (valid)", path.display())),
            None => output.info("Config: defaults (no qi.toml found)"),
        }
        if let Some(dir) = &config.previews_dir
            && !dir.is_dir()
        {
            output.warning(&format!("Preview directory not found: {}", dir.display()));
        }

        let registry = Registry::builtin();
        let problems = registry.check();
        if problems.is_empty() {
            output.success(&format!("Registry OK: {} components", registry.len()));
            return Ok(());
        }

        for problem in &problems {
            output.error(&format!("  {problem}"));
        }
        Err(CliError::Validation(format!(
            "{} registry problem(s) found",
            problems.len()
        )))
    }
}
