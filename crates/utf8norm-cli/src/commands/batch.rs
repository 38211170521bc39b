//! Batch command: Normalize every file matching the configured targets

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;
use utf8norm_core::{BatchConfig, ChardetngDetector, run_batch};

use super::exit_code;
use crate::types::BatchArgs;

/// Run the batch command
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is empty, or
/// on the first failing file with `--fail-fast`.
pub fn run(args: &BatchArgs) -> Result<ExitCode> {
    let config = build_config(args)?;
    for target in &config.targets {
        info!("Target: {}", target);
    }

    let report = run_batch(&config, ChardetngDetector::new())?;

    if args.json {
        println!("{}", report.to_json()?);
    }

    Ok(exit_code(report.failed(), report.converted.len(), args.check))
}

/// Merge the optional config file with command-line targets and flags
///
/// Flags can only switch options on; they never override a config file's
/// `true` with `false`.
///
/// # Errors
/// Returns an error if the config file cannot be loaded.
pub fn build_config(args: &BatchArgs) -> Result<BatchConfig> {
    let config = match &args.config {
        Some(path) => BatchConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BatchConfig::default(),
    };

    let universal_endline = config.universal_endline || args.universal_endline;
    let respect_gitignore = config.respect_gitignore || args.gitignore;
    let fail_fast = config.fail_fast || args.fail_fast;
    let dry_run = config.dry_run || args.check;

    Ok(config
        .with_targets(args.targets.iter().cloned())
        .with_universal_endline(universal_endline)
        .with_gitignore(respect_gitignore)
        .with_fail_fast(fail_fast)
        .with_dry_run(dry_run))
}
