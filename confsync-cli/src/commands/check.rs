//! Check command implementation.
//!
//! This module implements the `check` command, which builds the
//! reconciliation plan and reports drift without ever writing.

use crate::error::CliError;
use crate::utils::{build_store, read_document, GlobalOptions};
use clap::Args;
use confsync::{ConfigId, ReconcileOptions, Reconciler};
use std::path::PathBuf;

/// Report whether an apply would change anything.
#[derive(Args)]
pub struct CheckCommand {
    /// Configuration id to check
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Desired document file (use `-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Compare against the desired document alone instead of the merge result
    #[arg(long)]
    pub replace: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate arguments
        let id = ConfigId::new(&self.id).map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let desired = read_document(&self.file)?;

        // 2. Build the plan only; check never imports
        let store = build_store(global)?;
        let options = ReconcileOptions::new(id, desired).with_merge(!self.replace);
        let plan = Reconciler::new(&store).plan(&options)?;

        // 3. Drift is a semantic failure (exit code 1)
        if plan.has_changes() {
            Err(CliError::SemanticFailure(format!(
                "configuration '{}' differs from the desired state",
                self.id
            )))
        } else {
            if !global.quiet {
                println!("{}: in sync", self.id);
            }
            Ok(())
        }
    }
}
