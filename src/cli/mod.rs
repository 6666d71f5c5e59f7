//! CLI module
//!
//! Command-line interface for the user directory.
//!
//! # Commands
//!
//! - `browse` - Splash screen, then infinite scroll through the directory
//! - `fetch` - Fetch a single page as JSON
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

#[cfg(test)]
mod tests;
