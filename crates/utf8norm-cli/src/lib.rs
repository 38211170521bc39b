//! utf8norm-cli library
//!
//! This module exposes the internal functionality of utf8norm-cli for testing purposes.

// Make commands module available for internal tests only
#[doc(hidden)]
pub mod commands;

pub mod logging;
pub mod pause;
pub mod types;
pub use types::{BatchArgs, Cli, Commands, ConvertArgs, DetectArgs};

#[cfg(test)]
mod tests;
