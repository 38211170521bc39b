//! utf8norm-core: Core library for normalizing text files to UTF-8
//!
//! Detects the character encoding of text files and rewrites them as
//! UTF-8 without a byte-order mark, optionally converting CRLF line
//! endings to LF.
//!
//! # Components
//!
//! - **detect** - Encoding detection backed by `chardetng`
//! - **normalize** - Per-file detect-decode-rewrite routine
//! - **scanner** - Extension-filtered directory walking
//! - **batch** - Runs the normalizer over every scanned file

pub mod batch;
pub mod config;
pub mod detect;
pub mod normalize;
pub mod path;
pub mod scanner;

// Re-export commonly used types
pub use batch::{BatchError, BatchReport, FileFailure, run_batch};
pub use config::{BatchConfig, ConfigError};
pub use detect::{ChardetngDetector, Detection, DetectionSource, EncodingDetector};
pub use normalize::{
    Conversion, ConversionRequest, NormalizeError, Normalizer, Outcome, SkipReason, normalize,
};
pub use path::resolve_path;
pub use scanner::{Scanner, Target};
