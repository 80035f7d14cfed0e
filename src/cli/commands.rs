//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "collate")]
#[command(about = "Static-site collection builder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default site.toml
    Init {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Build all collections and write the manifest
    Build,

    /// List the items of a collection, newest first
    List {
        /// Collection name (e.g., aoc2020)
        collection: String,

        /// Show at most this many items
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show registered collections
    Collections,
}
