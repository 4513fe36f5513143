//! Search command implementation.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::resolve_format;
use clap::Args;
use flysky::operations::find;
use flysky::{Config, OutputFormat, ReservationStore};

/// Search reservations by name, flight number, departure, or destination.
///
/// Matching is a case-insensitive substring match; a blank term lists
/// everything.
#[derive(Args)]
pub struct SearchCommand {
    /// Text to look for
    #[arg(value_name = "TERM", allow_hyphen_values = true)]
    pub term: String,

    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, config: &Config, store: &ReservationStore) -> Result<(), CliError> {
        let reservations = find(store, &self.term)?;
        log::debug!(
            "search for {:?} matched {} reservation(s)",
            self.term,
            reservations.len()
        );

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(
            &mut handle,
            &reservations,
            resolve_format(self.format, config),
        )
    }
}
