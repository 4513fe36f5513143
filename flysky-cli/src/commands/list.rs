//! List command implementation.
//!
//! This module implements the `list` command, which displays every
//! reservation in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::resolve_format;
use clap::Args;
use flysky::{Config, OutputFormat, ReservationStore};

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, config: &Config, store: &ReservationStore) -> Result<(), CliError> {
        let reservations = store.get_all()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(
            &mut handle,
            &reservations,
            resolve_format(self.format, config),
        )
    }
}
