//! Database CRUD operations for reservations.
//!
//! Writes come in two flavours. The `try_*` methods propagate the underlying
//! fault. The plain methods (`add`, `update`, `delete`) log the fault and
//! collapse it into a success flag, which is all the presentation layer acts
//! on.

use rusqlite::{params, OptionalExtension};

use crate::error::Result;
use crate::{Reservation, ReservationFields, ReservationId};

use super::connection::ReservationStore;
use super::schema::{
    DELETE_RESERVATION, INSERT_RESERVATION, SEARCH_RESERVATIONS, SELECT_ALL, SELECT_BY_ID,
    UPDATE_RESERVATION,
};

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, name, `flight_number`, departure,
/// destination, date, `seat_number`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let fields = ReservationFields {
        name: row.get(1)?,
        flight_number: row.get(2)?,
        departure: row.get(3)?,
        destination: row.get(4)?,
        date: row.get(5)?,
        seat_number: row.get(6)?,
    };
    Ok(Reservation::new(ReservationId::new(id), fields))
}

impl ReservationStore {
    /// Inserts a reservation, propagating any fault.
    ///
    /// Fields are stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn try_add(&mut self, fields: &ReservationFields) -> Result<ReservationId> {
        self.conn.execute(
            INSERT_RESERVATION,
            params![
                fields.name,
                fields.flight_number,
                fields.departure,
                fields.destination,
                fields.date,
                fields.seat_number,
            ],
        )?;

        let id = ReservationId::new(self.conn.last_insert_rowid());
        log::debug!("added reservation {id} on flight {}", fields.flight_number);
        Ok(id)
    }

    /// Inserts a reservation and returns its new identifier.
    ///
    /// Returns `None` if the write failed; the fault is logged, not returned.
    /// Nothing is retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::database::ReservationStore;
    /// use flysky::ReservationFields;
    ///
    /// let mut store = ReservationStore::open_in_memory().unwrap();
    /// let fields = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
    ///
    /// let id = store.add(&fields).unwrap();
    /// assert_eq!(id.value(), 1);
    /// ```
    pub fn add(&mut self, fields: &ReservationFields) -> Option<ReservationId> {
        match self.try_add(fields) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("error adding reservation: {e}");
                None
            }
        }
    }

    /// Lists every reservation in identifier (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_all(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Retrieves a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    pub fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>> {
        let reservation = self
            .conn
            .query_row(SELECT_BY_ID, params![id.value()], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    /// Overwrites all six fields of a reservation, propagating any fault.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// The number of rows changed: 1, or 0 if no reservation has `id`.
    pub fn try_update(&mut self, id: ReservationId, fields: &ReservationFields) -> Result<usize> {
        let rows_affected = self.conn.execute(
            UPDATE_RESERVATION,
            params![
                fields.name,
                fields.flight_number,
                fields.departure,
                fields.destination,
                fields.date,
                fields.seat_number,
                id.value(),
            ],
        )?;
        Ok(rows_affected)
    }

    /// Overwrites all six fields of a reservation.
    ///
    /// An unknown `id` changes nothing and still reports success. Returns
    /// `false` only when the write itself failed; the fault is logged.
    pub fn update(&mut self, id: ReservationId, fields: &ReservationFields) -> bool {
        match self.try_update(id, fields) {
            Ok(0) => {
                log::debug!("update matched no reservation with id {id}");
                true
            }
            Ok(_) => true,
            Err(e) => {
                log::error!("error updating reservation {id}: {e}");
                false
            }
        }
    }

    /// Removes a reservation, propagating any fault.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// The number of rows removed: 1, or 0 if no reservation has `id`.
    pub fn try_delete(&mut self, id: ReservationId) -> Result<usize> {
        let rows_affected = self.conn.execute(DELETE_RESERVATION, params![id.value()])?;
        Ok(rows_affected)
    }

    /// Removes a reservation.
    ///
    /// Deleting an unknown `id` reports success. Returns `false` only when
    /// the write itself failed; the fault is logged.
    pub fn delete(&mut self, id: ReservationId) -> bool {
        match self.try_delete(id) {
            Ok(0) => {
                log::debug!("delete matched no reservation with id {id}");
                true
            }
            Ok(_) => true,
            Err(e) => {
                log::error!("error deleting reservation {id}: {e}");
                false
            }
        }
    }

    /// Finds reservations whose name, flight number, departure, or
    /// destination contains `term`.
    ///
    /// Matching uses `SQLite`'s `LIKE`: ASCII letters compare
    /// case-insensitively and `%` or `_` inside `term` act as wildcards. An
    /// empty term matches every reservation. Results are in identifier order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::database::ReservationStore;
    /// use flysky::ReservationFields;
    ///
    /// let mut store = ReservationStore::open_in_memory().unwrap();
    /// store.add(&ReservationFields::new("Alice", "FL1", "Oslo", "Rome", "d", "1A"));
    /// store.add(&ReservationFields::new("Bob", "FL2", "Oslo", "Rome", "d", "1B"));
    ///
    /// let found = store.search("Ali").unwrap();
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].fields().name, "Alice");
    /// ```
    pub fn search(&self, term: &str) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(SEARCH_RESERVATIONS)?;
        let reservations = stmt
            .query_map(params![term], row_to_reservation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }
}
