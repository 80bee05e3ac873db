//! Command implementations for the Argo processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod extract;
pub mod inspect;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the Argo processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `extract`: batch NetCDF-to-CSV extraction workflow
/// - `inspect`: single-file layout and variable-resolution report
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Extract(extract_args) => {
            extract::run_extract(extract_args).await?;
            Ok(())
        }
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
    }
}
