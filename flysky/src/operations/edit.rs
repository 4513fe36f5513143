//! Loading and editing existing reservations.
//!
//! Editing always loads the stored record first, so a reservation that no
//! longer exists is reported before anything is written.

use crate::error::{Error, Operation, Result};
use crate::repository::ReservationRepository;
use crate::{Field, Reservation, ReservationFields, ReservationId};

/// Replacement values for some or all of a reservation's fields.
///
/// Fields left unset keep their stored value.
///
/// # Examples
///
/// ```
/// use flysky::operations::FieldChanges;
///
/// let changes = FieldChanges::new().with_seat_number("14C");
/// assert!(!changes.is_empty());
/// assert!(FieldChanges::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChanges {
    /// New passenger name.
    pub name: Option<String>,
    /// New flight identifier.
    pub flight_number: Option<String>,
    /// New departure location.
    pub departure: Option<String>,
    /// New destination location.
    pub destination: Option<String>,
    /// New flight date.
    pub date: Option<String>,
    /// New seat identifier.
    pub seat_number: Option<String>,
}

impl FieldChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the passenger name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the flight identifier.
    #[must_use]
    pub fn with_flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = Some(flight_number.into());
        self
    }

    /// Sets the departure location.
    #[must_use]
    pub fn with_departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = Some(departure.into());
        self
    }

    /// Sets the destination location.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets the flight date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the seat identifier.
    #[must_use]
    pub fn with_seat_number(mut self, seat_number: impl Into<String>) -> Self {
        self.seat_number = Some(seat_number.into());
        self
    }

    /// Returns `true` if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    fn get(&self, field: Field) -> Option<&String> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::FlightNumber => self.flight_number.as_ref(),
            Field::Departure => self.departure.as_ref(),
            Field::Destination => self.destination.as_ref(),
            Field::Date => self.date.as_ref(),
            Field::SeatNumber => self.seat_number.as_ref(),
        }
    }

    /// Overlays these changes on `current`.
    #[must_use]
    pub fn apply(&self, current: &ReservationFields) -> ReservationFields {
        let mut merged = current.clone();
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                *merged.get_mut(field) = value.clone();
            }
        }
        merged
    }
}

/// Loads a reservation for display or editing.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no reservation has `id`, or the store's
/// read error.
pub fn load<R>(repo: &R, id: ReservationId) -> Result<Reservation>
where
    R: ReservationRepository + ?Sized,
{
    repo.get_by_id(id)?.ok_or(Error::NotFound { id })
}

/// Applies `changes` to reservation `id` and writes all six fields back.
///
/// The merged fields are trimmed and must all be non-empty before the store
/// is asked to update.
///
/// # Errors
///
/// Returns:
/// - [`Error::NotFound`] if the reservation does not exist
/// - [`Error::Validation`] if a merged field is empty; nothing is written
/// - [`Error::OperationFailed`] if the store reports that the update failed
///
/// # Examples
///
/// ```
/// use flysky::database::ReservationStore;
/// use flysky::operations::{book, edit, FieldChanges};
/// use flysky::ReservationFields;
///
/// let mut store = ReservationStore::open_in_memory().unwrap();
/// let form = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
/// let id = book(&mut store, &form).unwrap();
///
/// let updated = edit(&mut store, id, &FieldChanges::new().with_seat_number("14C")).unwrap();
/// assert_eq!(updated.fields().seat_number, "14C");
/// assert_eq!(updated.fields().name, "Jane Doe");
/// ```
pub fn edit<R>(repo: &mut R, id: ReservationId, changes: &FieldChanges) -> Result<Reservation>
where
    R: ReservationRepository + ?Sized,
{
    let current = load(&*repo, id)?;
    let fields = changes.apply(current.fields()).trimmed();
    fields.validate()?;

    if !repo.update(id, &fields) {
        return Err(Error::OperationFailed {
            operation: Operation::Update,
        });
    }

    log::info!("updated reservation {id}");
    Ok(Reservation::new(id, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockReservationRepository;

    fn stored(id: i64) -> Reservation {
        Reservation::new(
            ReservationId::new(id),
            ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A"),
        )
    }

    #[test]
    fn test_apply_overlays_only_set_fields() {
        let current = stored(1).into_fields();
        let merged = FieldChanges::new()
            .with_destination("Paris")
            .with_date("2025-11-01")
            .apply(&current);

        assert_eq!(merged.destination, "Paris");
        assert_eq!(merged.date, "2025-11-01");
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.seat_number, current.seat_number);
    }

    #[test]
    fn test_empty_changes_apply_is_identity() {
        let current = stored(1).into_fields();
        assert_eq!(FieldChanges::new().apply(&current), current);
    }

    #[test]
    fn test_load_missing() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let err = load(&repo, ReservationId::new(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_missing_never_updates() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let result = edit(
            &mut repo,
            ReservationId::new(5),
            &FieldChanges::new().with_seat_number("1A"),
        );
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_edit_writes_merged_fields() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored(id.value()))));
        repo.expect_update()
            .withf(|id: &ReservationId, fields: &ReservationFields| {
                id.value() == 3 && fields.seat_number == "14C" && fields.name == "Jane Doe"
            })
            .times(1)
            .returning(|_, _| true);

        let updated = edit(
            &mut repo,
            ReservationId::new(3),
            &FieldChanges::new().with_seat_number(" 14C "),
        )
        .unwrap();
        assert_eq!(updated.id(), ReservationId::new(3));
        assert_eq!(updated.fields().seat_number, "14C");
    }

    #[test]
    fn test_edit_blank_change_rejected() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored(id.value()))));
        repo.expect_update().never();

        let result = edit(
            &mut repo,
            ReservationId::new(1),
            &FieldChanges::new().with_name("  "),
        );
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_edit_store_failure() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(stored(id.value()))));
        repo.expect_update().times(1).returning(|_, _| false);

        let result = edit(&mut repo, ReservationId::new(1), &FieldChanges::new());
        assert!(matches!(
            result,
            Err(Error::OperationFailed {
                operation: Operation::Update
            })
        ));
    }
}
