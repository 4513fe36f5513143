//! The seam between the booking workflows and storage.
//!
//! Workflows in [`crate::operations`] are written against
//! [`ReservationRepository`] rather than a concrete store, so the store is
//! handed to them explicitly and can be replaced in tests.

use crate::database::ReservationStore;
use crate::error::Result;
use crate::{Reservation, ReservationFields, ReservationId};

/// Storage operations the workflows depend on.
///
/// Writes report a success flag; the reason for a failure is the
/// implementation's to log. Reads return errors normally, and absence of a
/// record is `Ok(None)`, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository {
    /// Inserts a reservation, returning its identifier, or `None` on failure.
    fn add(&mut self, fields: &ReservationFields) -> Option<ReservationId>;

    /// Lists every reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn get_all(&self) -> Result<Vec<Reservation>>;

    /// Looks up one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>>;

    /// Overwrites all six fields. Unknown ids report success.
    fn update(&mut self, id: ReservationId, fields: &ReservationFields) -> bool;

    /// Removes a reservation. Unknown ids report success.
    fn delete(&mut self, id: ReservationId) -> bool;

    /// Substring search over name, flight number, departure, and destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn search(&self, term: &str) -> Result<Vec<Reservation>>;
}

impl ReservationRepository for ReservationStore {
    fn add(&mut self, fields: &ReservationFields) -> Option<ReservationId> {
        ReservationStore::add(self, fields)
    }

    fn get_all(&self) -> Result<Vec<Reservation>> {
        ReservationStore::get_all(self)
    }

    fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        ReservationStore::get_by_id(self, id)
    }

    fn update(&mut self, id: ReservationId, fields: &ReservationFields) -> bool {
        ReservationStore::update(self, id, fields)
    }

    fn delete(&mut self, id: ReservationId) -> bool {
        ReservationStore::delete(self, id)
    }

    fn search(&self, term: &str) -> Result<Vec<Reservation>> {
        ReservationStore::search(self, term)
    }
}
