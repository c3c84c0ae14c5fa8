//! `qi build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use qi_config::CliSettings;
use qi_registry::Registry;
use qi_site::{FsPreviewSource, NoPreviews, PreviewSource, SiteBuilder};

use super::{ConfigArgs, block_on};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output directory for the generated site.
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Public base URL used in index URLs (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Directory of preview fragments (overrides config).
    #[arg(long)]
    previews_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_url: self.base_url,
            previews_dir: self.previews_dir,
            ..CliSettings::default()
        };
        let config = self.config.load(&cli_settings)?;

        let previews: Arc<dyn PreviewSource> = match &config.previews_dir {
            Some(dir) => {
                output.info(&format!("Previews: {}", dir.display()));
                Arc::new(FsPreviewSource::new(dir.clone()))
            }
            None => Arc::new(NoPreviews),
        };
        output.info(&format!("Output: {}", self.out.display()));

        let builder = SiteBuilder::new(
            Registry::builtin(),
            previews.as_ref(),
            &config.site.title,
            &config.site.base_url,
        );
        let report = block_on(builder.build(&self.out))??;

        output.success(&format!(
            "Built {} pages, {} registry files and {} assets into {}",
            report.pages,
            report.payloads,
            report.assets,
            self.out.display()
        ));
        Ok(())
    }
}
