//! Book command implementation.
//!
//! This module implements the `book` command, the command-line form for
//! booking a seat. It prints the new reservation's id on stdout.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use flysky::operations::book;
use flysky::{ReservationFields, ReservationStore};

/// Book a new reservation.
#[derive(Args)]
pub struct BookCommand {
    /// Passenger name
    #[arg(long)]
    pub name: String,

    /// Flight number, e.g. FL100
    #[arg(long)]
    pub flight_number: String,

    /// Departure airport or city
    #[arg(long)]
    pub departure: String,

    /// Destination airport or city
    #[arg(long)]
    pub destination: String,

    /// Travel date (free-form)
    #[arg(long)]
    pub date: String,

    /// Seat number, e.g. 12A
    #[arg(long = "seat", value_name = "SEAT")]
    pub seat_number: String,
}

impl BookCommand {
    fn into_fields(self) -> ReservationFields {
        ReservationFields {
            name: self.name,
            flight_number: self.flight_number,
            departure: self.departure,
            destination: self.destination,
            date: self.date,
            seat_number: self.seat_number,
        }
    }

    /// Execute the book command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        store: &mut ReservationStore,
    ) -> Result<(), CliError> {
        let id = book(store, &self.into_fields())?;

        if !global.quiet {
            eprintln!("Reservation booked");
        }
        println!("{id}");

        Ok(())
    }
}
