//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(author, version, about = "Resolve assets and render placeholders from view helper configuration", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Application configuration file (.json or .toml)
    #[arg(long, short, global = true, env = "TESSERA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Resolve a logical asset name to its path
    Asset {
        /// Logical asset name, e.g. "logo"
        name: String,
    },

    /// Show the configured resource map
    Assets,

    /// Collect fragments into a placeholder container and render it
    Placeholder {
        /// Placeholder name, e.g. "title"
        key: String,

        /// Fragments to append, in order
        values: Vec<String>,

        /// Separator between fragments
        #[arg(long, default_value = "")]
        separator: String,

        /// Text rendered before the first fragment
        #[arg(long, default_value = "")]
        prefix: String,

        /// Text rendered after the last fragment
        #[arg(long, default_value = "")]
        postfix: String,

        /// Number of spaces to indent with
        #[arg(long, default_value = "0")]
        indent: usize,
    },
}
