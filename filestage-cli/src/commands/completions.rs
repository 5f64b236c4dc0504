//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell
//! completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name the completions are generated for
const BIN_NAME: &str = "filestage";

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
        match self.shell {
            Shell::Bash => {
                eprintln!("# Enable with:");
                eprintln!("#   eval \"$(filestage completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("# Install with:");
                eprintln!("#   filestage completions zsh > ~/.zsh/completions/_filestage");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("# Install with:");
                eprintln!(
                    "#   filestage completions fish > ~/.config/fish/completions/filestage.fish"
                );
            }
            Shell::PowerShell => {
                eprintln!("# Enable with:");
                eprintln!("#   filestage completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
