//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, EditCommand, ListCommand, SearchCommand,
    SeedCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking and managing flight reservations.
#[derive(Parser)]
#[command(name = "flysky")]
#[command(version, about = "Book and manage flight reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the reservations database location
    #[arg(long, value_name = "PATH", global = true)]
    pub database: Option<PathBuf>,

    /// Read configuration from this file instead of ./flysky.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book a new reservation
    Book(BookCommand),

    /// List all reservations
    List(ListCommand),

    /// Search reservations by name, flight, or airport
    Search(SearchCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Change fields of an existing reservation
    Edit(EditCommand),

    /// Cancel (delete) a reservation
    Cancel(CancelCommand),

    /// Add the sample reservations
    Seed(SeedCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
