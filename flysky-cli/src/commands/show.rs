//! Show command implementation.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::resolve_format;
use clap::Args;
use flysky::operations::load;
use flysky::{Config, OutputFormat, ReservationId, ReservationStore};

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    ///
    /// An unknown id is a semantic failure (exit code 1).
    pub fn execute(self, config: &Config, store: &ReservationStore) -> Result<(), CliError> {
        let reservation = load(store, self.id)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(
            &mut handle,
            std::slice::from_ref(&reservation),
            resolve_format(self.format, config),
        )
    }
}
