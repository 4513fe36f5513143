#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flysky
//!
//! A library for storing flight reservations in a local SQLite file.
//!
//! This library provides the reservation store used by the flysky booking
//! front end, together with the small workflows each screen runs around it.
//!
//! ## Core Types
//!
//! - [`ReservationStore`] and [`StoreConfig`]: The SQLite-backed store
//! - [`Reservation`], [`ReservationFields`] and [`ReservationId`]: Stored records
//! - [`ReservationRepository`]: The interface workflows are written against
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use flysky::{ReservationFields, ReservationStore};
//!
//! let mut store = ReservationStore::open_in_memory().unwrap();
//!
//! let fields = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
//! let id = store.add(&fields).unwrap();
//!
//! let found = store.get_by_id(id).unwrap().unwrap();
//! assert_eq!(found.fields().name, "Jane Doe");
//! assert_eq!(store.search("london").unwrap().len(), 1);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod repository;
pub mod reservation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{ReservationStore, StoreConfig};
pub use error::{Error, Operation, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use repository::ReservationRepository;
pub use reservation::{Field, Reservation, ReservationFields, ReservationId, ValidationError};
