//! CLI commands

pub mod batch;
pub mod convert;
pub mod detect;

use std::process::ExitCode;

use anyhow::Result;

use crate::types::Commands;

/// Dispatch a parsed subcommand
///
/// # Errors
/// Returns an error if the command cannot run at all, e.g. on invalid
/// configuration. Per-file failures are reported through the exit code.
pub fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Convert(args) => convert::run(&args),
        Commands::Batch(args) => batch::run(&args),
        Commands::Detect(args) => detect::run(&args),
    }
}

/// A run succeeds unless a file failed, or `check` found files to convert
#[must_use]
pub fn succeeded(failed: usize, converted: usize, check: bool) -> bool {
    failed == 0 && !(check && converted > 0)
}

pub(crate) fn exit_code(failed: usize, converted: usize, check: bool) -> ExitCode {
    if succeeded(failed, converted, check) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
