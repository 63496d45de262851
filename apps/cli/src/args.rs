//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "forge")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Compile a project configuration into a reproducible dApp source archive")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to an optional ./forge.{toml,json,yaml})
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate, generate and package a project
    Compile {
        /// Project configuration (TOML, JSON or YAML)
        config: PathBuf,
        /// Archive path (defaults to <output.dir>/<project-slug>.zip)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Print a JSON report instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Check a project configuration without generating anything
    Validate {
        config: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the tier table
    Tiers {
        #[arg(long)]
        json: bool,
    },
    /// Print the feature registry
    Features {
        #[arg(long)]
        json: bool,
    },
}
