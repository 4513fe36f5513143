//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple test modules.

use crate::database::ReservationStore;
use crate::ReservationFields;

/// Creates an in-memory store with the reservations table in place.
///
/// # Panics
///
/// Panics if the store cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_store() -> ReservationStore {
    ReservationStore::open_in_memory().unwrap()
}

/// Creates a field set for the given passenger on a fixed flight.
#[must_use]
pub fn fields_named(name: &str) -> ReservationFields {
    ReservationFields::new(name, "FL100", "New York", "London", "2025-10-15", "12A")
}
