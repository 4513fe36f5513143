//! Database layer for persistent storage of flight reservations.
//!
//! This module provides a SQLite-based store holding a single `reservations`
//! table, including connection management, table creation, and the CRUD and
//! search operations.
//!
//! # Examples
//!
//! ```no_run
//! use flysky::database::{ReservationStore, StoreConfig};
//! use flysky::ReservationFields;
//!
//! // Open a store
//! let config = StoreConfig::new("/tmp/flights.db");
//! let mut store = ReservationStore::open(config).unwrap();
//!
//! // Book a seat
//! let fields = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
//! let id = store.add(&fields).expect("booking failed");
//!
//! // List all reservations
//! for reservation in store.get_all().unwrap() {
//!     println!("{:?}", reservation);
//! }
//!
//! store.close().unwrap();
//! ```

mod config;
mod connection;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export public API
pub use config::{StoreConfig, DEFAULT_DATABASE_FILE};
pub use connection::ReservationStore;
