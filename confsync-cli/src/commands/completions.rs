//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name the completion scripts are generated for.
const BIN_NAME: &str = "confsync";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   confsync completions bash > ~/.local/share/bash-completion/completions/confsync"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(confsync completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   confsync completions zsh > ~/.zsh/completions/_confsync");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(confsync completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!(
                    "#   confsync completions fish > ~/.config/fish/completions/confsync.fish"
                );
                eprintln!("# Or add to config.fish:");
                eprintln!("#   confsync completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   confsync completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   confsync completions powershell | Out-String | Invoke-Expression");
            }
            Shell::Elvish => {
                // Elvish included by default in clap_complete but no custom instructions needed
            }
            _ => {
                // Future shells added to clap_complete
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
