//! Apply command implementation.
//!
//! This module implements the `apply` command, which reconciles one
//! configuration entry with a desired document: fetch, merge or replace,
//! and import only when something differs.

use crate::error::CliError;
use crate::utils::{build_store, read_document, render, GlobalOptions, OutputFormat};
use clap::Args;
use confsync::{ConfigId, ReconcileOptions, Reconciler};
use std::path::PathBuf;

/// Reconcile a configuration entry with a desired document.
#[derive(Args)]
pub struct ApplyCommand {
    /// Configuration id to reconcile
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Desired document file (use `-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Replace the current document instead of merging into it
    #[arg(long)]
    pub replace: bool,

    /// Compute the result without importing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for the outcome
    #[arg(long, value_enum, default_value = "yaml", ignore_case = true)]
    pub format: OutputFormat,
}

impl ApplyCommand {
    /// Execute the apply command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate the configuration id
        let id = ConfigId::new(&self.id).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        // 2. Read the desired document (file or stdin)
        let desired = read_document(&self.file)?;

        // 3. Build the store from global options
        let store = build_store(global)?;

        // 4. Build library options
        let options = ReconcileOptions::new(id, desired)
            .with_merge(!self.replace)
            .with_dry_run(self.dry_run);

        // 5. Reconcile
        let outcome = Reconciler::new(&store).reconcile(&options)?;

        // 6. Print the outcome (changed, old_config, config) to stdout
        print!("{}", render(self.format, &outcome)?);

        // 7. Report the action taken to stderr
        if !global.quiet {
            if self.dry_run {
                eprintln!("Dry run - nothing was imported");
            } else if outcome.changed {
                eprintln!("Imported '{}'", self.id);
            }
        }

        Ok(())
    }
}
