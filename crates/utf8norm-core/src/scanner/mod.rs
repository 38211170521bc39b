//! Scanner module: File discovery by extension
//!
//! Responsible for walking each target root recursively and yielding
//! the regular files whose name ends with the target's extension.

mod target;
mod walker;

pub use target::{Target, TargetParseError};
pub use walker::Scanner;
