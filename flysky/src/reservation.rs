//! Reservation types for tracking booked flights.
//!
//! A reservation is one passenger's seat on one flight. The six descriptive
//! fields are opaque text: nothing here parses dates or checks seat formats.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a reservation.
///
/// Identifiers are handed out by the store in strictly increasing order and
/// are never reused after a reservation is deleted.
///
/// # Examples
///
/// ```
/// use flysky::ReservationId;
///
/// let id: ReservationId = "12".parse().unwrap();
/// assert_eq!(id.value(), 12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw row identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Names of the six user-supplied reservation fields, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Passenger name.
    Name,
    /// Flight identifier.
    FlightNumber,
    /// Departure location.
    Departure,
    /// Destination location.
    Destination,
    /// Flight date, free-form.
    Date,
    /// Seat identifier.
    SeatNumber,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::FlightNumber,
        Self::Departure,
        Self::Destination,
        Self::Date,
        Self::SeatNumber,
    ];

    /// The column name used for this field in storage and output.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FlightNumber => "flight_number",
            Self::Departure => "departure",
            Self::Destination => "destination",
            Self::Date => "date",
            Self::SeatNumber => "seat_number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// The six descriptive fields of a reservation.
///
/// Values are stored verbatim. Use [`ReservationFields::trimmed`] and
/// [`ReservationFields::validate`] at the input boundary.
///
/// # Examples
///
/// ```
/// use flysky::ReservationFields;
///
/// let fields = ReservationFields::new(
///     "Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A",
/// );
/// assert!(fields.validate().is_ok());
/// assert_eq!(fields.seat_number, "12A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationFields {
    /// Passenger name.
    pub name: String,
    /// Flight identifier.
    pub flight_number: String,
    /// Departure location.
    pub departure: String,
    /// Destination location.
    pub destination: String,
    /// Flight date, free-form text.
    pub date: String,
    /// Seat identifier.
    pub seat_number: String,
}

impl ReservationFields {
    /// Creates a field set from the six values in column order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        flight_number: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flight_number: flight_number.into(),
            departure: departure.into(),
            destination: destination.into(),
            date: date.into(),
            seat_number: seat_number.into(),
        }
    }

    /// Returns the value of a single field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::FlightNumber => &self.flight_number,
            Field::Departure => &self.departure,
            Field::Destination => &self.destination,
            Field::Date => &self.date,
            Field::SeatNumber => &self.seat_number,
        }
    }

    /// Returns a mutable reference to a single field.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::FlightNumber => &mut self.flight_number,
            Field::Departure => &mut self.departure,
            Field::Destination => &mut self.destination,
            Field::Date => &mut self.date,
            Field::SeatNumber => &mut self.seat_number,
        }
    }

    /// Returns a copy with leading and trailing whitespace removed from every
    /// field.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::ReservationFields;
    ///
    /// let fields = ReservationFields::new(" Jane ", "FL100", "NYC", "LHR", "today", " 1A");
    /// let trimmed = fields.trimmed();
    /// assert_eq!(trimmed.name, "Jane");
    /// assert_eq!(trimmed.seat_number, "1A");
    /// ```
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut out = self.clone();
        for field in Field::ALL {
            let value = out.get_mut(field);
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }
        out
    }

    /// Checks that every field is non-empty.
    ///
    /// Whitespace-only values count as empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first empty field in column
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::ReservationFields;
    ///
    /// let fields = ReservationFields::new("Jane", "", "NYC", "LHR", "today", "1A");
    /// let err = fields.validate().unwrap_err();
    /// assert_eq!(err.field, "flight_number");
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            Some(field) => Err(ValidationError {
                field: field.column().into(),
                message: "all fields are required".into(),
            }),
            None => Ok(()),
        }
    }
}

/// A stored reservation: an identifier plus its six fields.
///
/// # Examples
///
/// ```
/// use flysky::{Reservation, ReservationFields, ReservationId};
///
/// let fields = ReservationFields::new("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A");
/// let reservation = Reservation::new(ReservationId::new(1), fields);
/// assert_eq!(reservation.id().value(), 1);
/// assert_eq!(reservation.fields().flight_number, "FL100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    #[serde(flatten)]
    fields: ReservationFields,
}

impl Reservation {
    /// Pairs an identifier with its fields.
    #[must_use]
    pub const fn new(id: ReservationId, fields: ReservationFields) -> Self {
        Self { id, fields }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn fields(&self) -> &ReservationFields {
        &self.fields
    }

    /// Consumes the reservation, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> ReservationFields {
        self.fields
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
