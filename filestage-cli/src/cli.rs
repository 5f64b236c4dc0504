//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CollectCommand, CompletionsCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for collecting touched files into a staging tree.
#[derive(Parser)]
#[command(name = "filestage")]
#[command(version, about = "Collect touched files into a portable staging tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Copy files into a staging root and print the mapping
    Collect(CollectCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
