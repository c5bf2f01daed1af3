//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dynamic Shelf - merge shelf definition files into one loadable shelf
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "DYNAMIC_SHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Environment variable that holds the shelf search path
    #[arg(long, global = true)]
    pub search_var: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge all shelf sources and write the result
    ///
    /// Prints the path of the written shelf on stdout so a host
    /// application can load it.
    ///
    /// Examples:
    ///   shelf build                        # Write to a new temp file
    ///   shelf build -o merged.shelf        # Write to a chosen path
    ///   shelf build -s extra/tools.shelf   # Add a source after the search path
    Build {
        /// Output path (defaults to a new file in the temp shelf directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Additional shelf source, folded after the search path sources
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,
    },

    /// List the shelf sources that would be merged, in merge order
    Sources {
        /// Additional shelf source
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Parse every shelf source and report problems
    Check {
        /// Additional shelf source
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
