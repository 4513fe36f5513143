//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "flysky";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// Needs no database; the script goes to stdout and install hints go to
    /// stderr.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   flysky completions bash > ~/.local/share/bash-completion/completions/flysky"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(flysky completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   flysky completions zsh > ~/.zsh/completions/_flysky");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   flysky completions fish > ~/.config/fish/completions/flysky.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!("#   flysky completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
