//! Detect command: Print the detected encoding of files

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::error;
use utf8norm_core::{ChardetngDetector, Detection, EncodingDetector, resolve_path};

use super::exit_code;
use crate::types::DetectArgs;

/// Run the detect command
///
/// # Errors
/// Never fails as a whole; unreadable files are logged and reflected in the
/// exit code.
pub fn run(args: &DetectArgs) -> Result<ExitCode> {
    let detector = ChardetngDetector::new();
    let mut failed = 0;

    for file in &args.files {
        match detect_file(&detector, file) {
            Ok(detection) => println!("{}: {}", file.display(), detection),
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    Ok(exit_code(failed, 0, false))
}

/// Detect the encoding of a single file
///
/// # Errors
/// Returns an error if the file cannot be resolved or read.
pub fn detect_file(detector: &impl EncodingDetector, file: &Path) -> Result<Detection> {
    let path = resolve_path(file).with_context(|| format!("Cannot open {}", file.display()))?;
    let bytes = fs::read(&path).with_context(|| format!("Cannot read {}", path.display()))?;
    Ok(detector.detect(&bytes))
}
