//! Get command implementation.
//!
//! This module implements the `get` command, which fetches one
//! configuration entry from the live site and prints it.

use crate::error::CliError;
use crate::utils::{build_store, render, GlobalOptions, OutputFormat};
use clap::Args;
use confsync::{ConfigId, ConfigStore};

/// Fetch a configuration entry and print it.
#[derive(Args)]
pub struct GetCommand {
    /// Configuration id to fetch
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Remove the reserved metadata key from the output
    #[arg(long)]
    pub strip: bool,

    /// Output format for the document
    #[arg(long, value_enum, default_value = "yaml", ignore_case = true)]
    pub format: OutputFormat,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate the configuration id
        let id = ConfigId::new(&self.id).map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        // 2. Fetch from the live site
        let store = build_store(global)?;
        let document = store.get(&id).map_err(CliError::from)?;

        // 3. Print the document, or fail semantically when absent
        match document {
            Some(document) => {
                let document = if self.strip {
                    document.stripped()
                } else {
                    document
                };
                print!("{}", render(self.format, &document)?);
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "configuration '{id}' does not exist"
            ))),
        }
    }
}
