//! Library exports for flysky-cli.
//!
//! This module exports the CLI structure and commands for the binary and
//! for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
