//! utf8norm: Rewrite text files as UTF-8 without BOM

use std::process::ExitCode;

use clap::Parser;
use utf8norm_cli::commands;
use utf8norm_cli::logging::setup_logging;
use utf8norm_cli::pause::pause;
use utf8norm_cli::types::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let code = match commands::run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    };

    if cli.pause {
        pause();
    }

    code
}
