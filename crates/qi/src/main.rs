//! QI CLI - component registry and catalog site.
//!
//! Provides commands for:
//! - `serve`: Start the registry API and catalog server
//! - `list`: List registry components
//! - `show`: Show one component's details
//! - `copy`: Copy a component's install command or source to the clipboard
//! - `build`: Export the catalog as a static site
//! - `check`: Check the built-in registry for data defects

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, CopyArgs, ListArgs, ServeArgs, ShowArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// QI - UI component registry.
#[derive(Parser)]
#[command(name = "qi", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry server.
    Serve(ServeArgs),
    /// List registry components.
    List(ListArgs),
    /// Show a component's details.
    Show(ShowArgs),
    /// Copy a component's install command or source to the clipboard.
    Copy(CopyArgs),
    /// Export the catalog as a static site.
    Build(BuildArgs),
    /// Check the registry and configuration.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => args.execute(VERSION),
        Commands::List(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Copy(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_copy_manual() {
        let cli = Cli::try_parse_from(["qi", "copy", "wave", "--manual"]).unwrap();
        assert!(matches!(cli.command, Commands::Copy(_)));
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::try_parse_from(["qi", "list", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_show_requires_slug() {
        assert!(Cli::try_parse_from(["qi", "show"]).is_err());
    }
}
