//! Booking a new reservation.

use crate::error::{Error, Operation, Result};
use crate::repository::ReservationRepository;
use crate::{ReservationFields, ReservationId};

/// Books a seat from raw form input.
///
/// Every field is trimmed, then all six must be non-empty. Only then is the
/// store asked to insert the reservation.
///
/// # Errors
///
/// Returns:
/// - [`Error::Validation`] naming the first empty field; nothing is written
/// - [`Error::OperationFailed`] if the store reports that the insert failed
///
/// # Examples
///
/// ```
/// use flysky::database::ReservationStore;
/// use flysky::operations::book;
/// use flysky::ReservationFields;
///
/// let mut store = ReservationStore::open_in_memory().unwrap();
/// let form = ReservationFields::new(" Jane Doe ", "FL100", "New York", "London", "2025-10-15", "12A");
///
/// let id = book(&mut store, &form).unwrap();
/// let stored = store.get_by_id(id).unwrap().unwrap();
/// assert_eq!(stored.fields().name, "Jane Doe");
/// ```
pub fn book<R>(repo: &mut R, form: &ReservationFields) -> Result<ReservationId>
where
    R: ReservationRepository + ?Sized,
{
    let fields = form.trimmed();
    fields.validate()?;

    let id = repo.add(&fields).ok_or(Error::OperationFailed {
        operation: Operation::Add,
    })?;
    log::info!(
        "booked {} on {} ({} -> {}) as reservation {id}",
        fields.name,
        fields.flight_number,
        fields.departure,
        fields.destination
    );
    Ok(id)
}
