//! Batch driver: Normalize every file matched by a configuration
//!
//! Files are processed one at a time in scan order. A failing file is
//! logged and recorded in the report, then the run moves on, unless
//! `fail_fast` is set.

mod report;

use tracing::{info, warn};

pub use report::{BatchReport, FileFailure};

use crate::config::{BatchConfig, ConfigError};
use crate::detect::EncodingDetector;
use crate::normalize::{ConversionRequest, NormalizeError, Normalizer, Outcome};
use crate::scanner::Scanner;

/// Errors that abort a batch run
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// First failure of a `fail_fast` run
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Run the normalizer over every file matched by `config`
///
/// `detector` is used for every file; with `dry_run` set nothing is written.
///
/// # Errors
/// Returns an error if the configuration is invalid, or on the first
/// per-file failure when `fail_fast` is set. Otherwise per-file failures
/// are collected in the report.
pub fn run_batch<D: EncodingDetector>(
    config: &BatchConfig,
    detector: D,
) -> Result<BatchReport, BatchError> {
    config.validate()?;

    let normalizer = Normalizer::with_detector(detector).with_dry_run(config.dry_run);

    let scanner =
        Scanner::new(config.targets.clone()).with_gitignore(config.respect_gitignore);
    let mut report = BatchReport::default();

    for path in scanner.scan() {
        let request =
            ConversionRequest::new(&path).with_universal_endline(config.universal_endline);
        match normalizer.normalize(&request) {
            Ok(Outcome::Converted(conversion)) => report.record_converted(conversion),
            Ok(Outcome::Unchanged(reason)) => report.record_unchanged(reason),
            Err(e) if config.fail_fast => return Err(e.into()),
            Err(e) => {
                warn!("Failed to normalize {}: {}", path.display(), e);
                report.record_failure(&path, &e);
            }
        }
    }

    log_batch_summary(&report);
    Ok(report)
}

fn log_batch_summary(report: &BatchReport) {
    if report.failed() > 0 {
        info!(
            "✓ Normalized {} files: {} converted, {} already UTF-8, {} undetectable ({} failed)",
            report.total(),
            report.converted.len(),
            report.already_target,
            report.undetectable,
            report.failed()
        );
    } else {
        info!(
            "✓ Normalized {} files: {} converted, {} already UTF-8, {} undetectable",
            report.total(),
            report.converted.len(),
            report.already_target,
            report.undetectable
        );
    }
}
