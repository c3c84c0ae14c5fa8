//! `qi copy` command implementation.

use clap::Args;
use qi_site::{CopyButton, CopyState, SystemClipboard};

use super::lookup;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the copy command.
#[derive(Args)]
pub(crate) struct CopyArgs {
    /// Component slug or published name (e.g. `wave`, `feature-list`).
    slug: String,

    /// Copy the implementation source instead of the install command.
    #[arg(long)]
    manual: bool,
}

impl CopyArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let summary = lookup(&self.slug)?;
        let record = summary.record;
        let title = summary.title();

        let (what, text) = if self.manual {
            ("source", record.implementation_source)
        } else {
            ("install command", record.cli_command)
        };

        let mut button = CopyButton::new(SystemClipboard);
        match button.press(text) {
            CopyState::Copied => output.success(&format!("Copied {title} {what} to clipboard")),
            CopyState::Idle => {
                output.warning("Clipboard unavailable, printing instead:");
                output.data(text);
            }
        }

        Ok(())
    }
}
