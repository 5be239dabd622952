//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ApplyCommand, CheckCommand, CompletionsCommand, GetCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for reconciling declared configuration with a live site.
#[derive(Parser)]
#[command(name = "confsync")]
#[command(
    version,
    about = "Reconcile declared configuration with a live Drupal site",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the site installation root
    #[arg(long, value_name = "PATH", global = true, env = "CONFSYNC_ROOT")]
    pub root: Option<PathBuf>,

    /// Override the path to the drush executable
    #[arg(long, value_name = "PATH", global = true, env = "CONFSYNC_DRUSH_PATH")]
    pub drush_path: Option<PathBuf>,

    /// Override the tool invocation timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "CONFSYNC_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Reconcile a configuration entry with a desired document
    Apply(ApplyCommand),

    /// Fetch a configuration entry and print it
    Get(GetCommand),

    /// Report whether an apply would change anything
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
