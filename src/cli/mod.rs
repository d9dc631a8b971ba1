//! Command-line interface
//!
//! Argument parsing lives in [`commands`], execution in [`runner`].

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
