//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use utf8norm_core::Target;

#[derive(Parser)]
#[command(name = "utf8norm")]
#[command(author, version, about = "Rewrite text files as UTF-8 without BOM", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Wait for Enter before exiting
    #[arg(long, global = true)]
    pub pause: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize individual files
    Convert(ConvertArgs),

    /// Normalize every file matching the configured targets
    Batch(BatchArgs),

    /// Print the detected encoding of files
    Detect(DetectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Files to normalize
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Leave CRLF line endings as they are
    #[arg(long)]
    pub keep_line_endings: bool,

    /// Report files that would be converted without writing them
    #[arg(long)]
    pub check: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    /// JSON file listing targets and options
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory and extension to process, e.g. include:h (repeatable)
    #[arg(long = "target", short, value_name = "ROOT:EXT")]
    pub targets: Vec<Target>,

    /// Replace CRLF with LF in converted files
    #[arg(long)]
    pub universal_endline: bool,

    /// Skip files excluded by .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Report files that would be converted without writing them
    #[arg(long)]
    pub check: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
