//! Convert command: Normalize individual files

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};
use utf8norm_core::{ConversionRequest, Normalizer};

use super::exit_code;
use crate::types::ConvertArgs;

/// Run the convert command
///
/// # Errors
/// Never fails as a whole; per-file errors are logged and reflected in the
/// exit code.
pub fn run(args: &ConvertArgs) -> Result<ExitCode> {
    let normalizer = Normalizer::new().with_dry_run(args.check);
    let mut converted = 0;
    let mut failed = 0;

    for file in &args.files {
        let request =
            ConversionRequest::new(file).with_universal_endline(!args.keep_line_endings);
        match normalizer.normalize(&request) {
            Ok(outcome) if outcome.is_converted() => converted += 1,
            Ok(_) => {}
            Err(e) => {
                error!("{}", e);
                failed += 1;
            }
        }
    }

    if args.check && converted > 0 {
        info!("{} of {} files need conversion", converted, args.files.len());
    }

    Ok(exit_code(failed, converted, args.check))
}
