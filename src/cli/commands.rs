//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// User directory CLI
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the splash screen, then scroll through the directory
    Browse {
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<u32>,

        /// How many times to retry from page 1 after a failure
        #[arg(long, default_value = "0")]
        retries: u32,

        /// Skip the splash screen
        #[arg(long)]
        no_splash: bool,
    },

    /// Fetch a single page and print it as JSON
    Fetch {
        /// Page number (starts at 1)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Print the effective configuration as YAML
    Config,
}
