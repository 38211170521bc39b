//! Tests for command-line parsing

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;
use utf8norm_core::Target;

use crate::types::{Cli, Commands};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("Failed to parse args")
}

#[test]
fn test_convert_defaults() {
    let cli = parse(&["utf8norm", "convert", "a.h", "b.cpp"]);
    assert!(!cli.verbose);
    assert!(!cli.pause);
    let Commands::Convert(args) = cli.command else {
        panic!("expected convert");
    };
    assert_eq!(args.files, vec![PathBuf::from("a.h"), PathBuf::from("b.cpp")]);
    assert!(!args.keep_line_endings);
    assert!(!args.check);
}

#[test]
fn test_convert_requires_files() {
    assert!(Cli::try_parse_from(["utf8norm", "convert"]).is_err());
}

#[test]
fn test_batch_targets_and_flags() {
    let cli = parse(&[
        "utf8norm",
        "batch",
        "--target",
        "include:h",
        "-t",
        "wsCore:.cpp",
        "--universal-endline",
        "--gitignore",
        "--fail-fast",
        "--check",
        "--json",
    ]);
    let Commands::Batch(args) = cli.command else {
        panic!("expected batch");
    };
    assert_eq!(
        args.targets,
        vec![Target::new("include", "h"), Target::new("wsCore", "cpp")]
    );
    assert!(args.universal_endline);
    assert!(args.gitignore);
    assert!(args.fail_fast);
    assert!(args.check);
    assert!(args.json);
    assert_eq!(args.config, None);
}

#[test]
fn test_batch_rejects_malformed_target() {
    assert!(Cli::try_parse_from(["utf8norm", "batch", "--target", "include"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["utf8norm", "detect", "a.h", "--verbose", "--pause"]);
    assert!(cli.verbose);
    assert!(cli.pause);
    assert!(matches!(cli.command, Commands::Detect(_)));
}

#[test]
fn test_batch_config_path() {
    let cli = parse(&["utf8norm", "batch", "--config", "targets.json"]);
    let Commands::Batch(args) = cli.command else {
        panic!("expected batch");
    };
    assert_eq!(args.config, Some(PathBuf::from("targets.json")));
    assert!(args.targets.is_empty());
}
