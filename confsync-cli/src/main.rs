//! Main entry point for the confsync CLI.
//!
//! This is the command-line interface for the confsync configuration
//! reconciler. It provides commands for keeping a live Drupal site in line
//! with declared configuration documents:
//! - `apply`: Reconcile a configuration entry with a desired document
//! - `get`: Fetch a configuration entry and print it
//! - `check`: Report whether an apply would change anything
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = confsync::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root: cli.root,
        drush_path: cli.drush_path,
        timeout: cli.timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Apply(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
