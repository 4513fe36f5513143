//! Booking workflows built on top of the reservation store.
//!
//! Each workflow is what one screen of the booking front end does around a
//! single store call: clean up and check the form input, call the store, and
//! turn the store's success flag into a [`Result`](crate::Result) the front
//! end can report.
//!
//! Workflows take any [`ReservationRepository`](crate::ReservationRepository),
//! so the store is passed in explicitly by whoever owns it.
//!
//! # Examples
//!
//! ```no_run
//! use flysky::database::{ReservationStore, StoreConfig};
//! use flysky::operations::{book, cancel, edit, find, FieldChanges};
//! use flysky::ReservationFields;
//!
//! let mut store = ReservationStore::open(StoreConfig::new("/tmp/flights.db")).unwrap();
//!
//! let form = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
//! let id = book(&mut store, &form).unwrap();
//!
//! edit(&mut store, id, &FieldChanges::new().with_seat_number("14C")).unwrap();
//! assert_eq!(find(&store, "Jane").unwrap().len(), 1);
//!
//! cancel(&mut store, id).unwrap();
//! store.close().unwrap();
//! ```

pub mod book;
pub mod cancel;
pub mod edit;
pub mod find;
pub mod seed;

pub use book::book;
pub use cancel::cancel;
pub use edit::{edit, load, FieldChanges};
pub use find::find;
pub use seed::{sample_reservations, seed, SeedReport};
