//! Edit command implementation.
//!
//! This module implements the `edit` command. Only the fields given on the
//! command line change; the rest keep their stored values. The updated
//! reservation is printed afterwards.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::{resolve_format, GlobalOptions};
use clap::Args;
use flysky::operations::{edit, FieldChanges};
use flysky::{Config, OutputFormat, ReservationId, ReservationStore};

/// Change fields of an existing reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: ReservationId,

    /// New passenger name
    #[arg(long)]
    pub name: Option<String>,

    /// New flight number
    #[arg(long)]
    pub flight_number: Option<String>,

    /// New departure
    #[arg(long)]
    pub departure: Option<String>,

    /// New destination
    #[arg(long)]
    pub destination: Option<String>,

    /// New travel date
    #[arg(long)]
    pub date: Option<String>,

    /// New seat number
    #[arg(long = "seat", value_name = "SEAT")]
    pub seat_number: Option<String>,

    /// Output format for the updated reservation
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl EditCommand {
    fn changes(&self) -> FieldChanges {
        FieldChanges {
            name: self.name.clone(),
            flight_number: self.flight_number.clone(),
            departure: self.departure.clone(),
            destination: self.destination.clone(),
            date: self.date.clone(),
            seat_number: self.seat_number.clone(),
        }
    }

    /// Execute the edit command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        config: &Config,
        store: &mut ReservationStore,
    ) -> Result<(), CliError> {
        let changes = self.changes();
        if changes.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to change; pass at least one field option".to_string(),
            ));
        }

        let updated = edit(store, self.id, &changes)?;

        if !global.quiet {
            eprintln!("Reservation {} updated", self.id);
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(
            &mut handle,
            std::slice::from_ref(&updated),
            resolve_format(self.format, config),
        )
    }
}
