//! Cancel command implementation.
//!
//! Cancelling deletes the reservation. Unless `--yes` is given, the user is
//! asked to confirm on stdin first; declining leaves the store untouched and
//! still exits successfully.

use crate::error::CliError;
use crate::utils::{confirm, GlobalOptions};
use clap::Args;
use flysky::operations::cancel;
use flysky::{ReservationId, ReservationStore};

/// Cancel (delete) a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    /// Do not ask for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        store: &mut ReservationStore,
    ) -> Result<(), CliError> {
        if !self.yes {
            let prompt = match store.get_by_id(self.id)? {
                Some(reservation) => {
                    let fields = reservation.fields();
                    format!(
                        "Cancel reservation {} ({}, {} {} -> {} on {}, seat {})?",
                        self.id,
                        fields.name,
                        fields.flight_number,
                        fields.departure,
                        fields.destination,
                        fields.date,
                        fields.seat_number
                    )
                }
                None => format!("Cancel reservation {}?", self.id),
            };

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut prompt_out = std::io::stderr();
            if !confirm(&prompt, &mut input, &mut prompt_out)? {
                if !global.quiet {
                    eprintln!("Reservation {} kept", self.id);
                }
                return Ok(());
            }
        }

        cancel(store, self.id)?;

        if !global.quiet {
            eprintln!("Reservation {} cancelled", self.id);
        }

        Ok(())
    }
}
