//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the flysky library against real database files.

use std::path::PathBuf;

use flysky::database::{ReservationStore, StoreConfig};
use flysky::ReservationFields;
use tempfile::TempDir;

/// A store backed by a file in its own temporary directory.
///
/// The directory is removed when the fixture is dropped, so keep it alive
/// for as long as the store is used.
#[allow(dead_code)]
pub struct FileStore {
    pub dir: TempDir,
    pub path: PathBuf,
    pub store: ReservationStore,
}

/// Opens a fresh file-backed store.
#[allow(dead_code)]
pub fn create_file_store() -> FileStore {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.db");
    let store = ReservationStore::open(StoreConfig::new(&path)).unwrap();
    FileStore { dir, path, store }
}

/// Builder for reservation form data with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::FieldsFixture;
/// let fields = FieldsFixture::new().name("Ana").seat("3C").build();
/// ```
#[allow(dead_code)]
pub struct FieldsFixture {
    fields: ReservationFields,
}

#[allow(dead_code)]
impl FieldsFixture {
    /// Creates a new fixture builder.
    ///
    /// Defaults to Jane Doe on FL100 from New York to London, 2025-10-15,
    /// seat 12A.
    pub fn new() -> Self {
        Self {
            fields: ReservationFields::new(
                "Jane Doe",
                "FL100",
                "New York",
                "London",
                "2025-10-15",
                "12A",
            ),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.fields.name = name.to_string();
        self
    }

    pub fn flight(mut self, flight_number: &str) -> Self {
        self.fields.flight_number = flight_number.to_string();
        self
    }

    pub fn route(mut self, departure: &str, destination: &str) -> Self {
        self.fields.departure = departure.to_string();
        self.fields.destination = destination.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.fields.date = date.to_string();
        self
    }

    pub fn seat(mut self, seat_number: &str) -> Self {
        self.fields.seat_number = seat_number.to_string();
        self
    }

    pub fn build(self) -> ReservationFields {
        self.fields
    }
}

impl Default for FieldsFixture {
    fn default() -> Self {
        Self::new()
    }
}
