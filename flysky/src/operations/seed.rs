//! Populating an empty store with sample reservations.
//!
//! The samples cover the five demo flights FL100 through FL104, one passenger
//! each. Seeding goes through the regular `add` path one row at a time.

use crate::error::Result;
use crate::repository::ReservationRepository;
use crate::{ReservationFields, ReservationId};

/// `(name, flight_number, departure, destination, date, seat_number)`
const SAMPLE_RESERVATIONS: [(&str, &str, &str, &str, &str, &str); 5] = [
    ("Jane Doe", "FL100", "New York", "London", "2025-10-15", "12A"),
    ("John Smith", "FL101", "Paris", "Tokyo", "2025-10-16", "7C"),
    ("Maria Garcia", "FL102", "Dubai", "Sydney", "2025-10-17", "22F"),
    ("Wei Chen", "FL103", "Chicago", "Berlin", "2025-10-18", "3B"),
    ("Amara Okafor", "FL104", "Toronto", "Mumbai", "2025-10-19", "18D"),
];

/// Returns the built-in sample reservations in insertion order.
#[must_use]
pub fn sample_reservations() -> Vec<ReservationFields> {
    SAMPLE_RESERVATIONS
        .iter()
        .map(|&(name, flight, departure, destination, date, seat)| {
            ReservationFields::new(name, flight, departure, destination, date, seat)
        })
        .collect()
}

/// Outcome of a [`seed`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Identifiers of the reservations that were inserted.
    pub inserted: Vec<ReservationId>,
    /// Number of samples the store failed to insert.
    pub failed: usize,
    /// Whether seeding was skipped because the store already had data.
    pub skipped: bool,
}

/// Adds the sample reservations.
///
/// A store that already holds reservations is left alone unless `force` is
/// set. Failed inserts are counted and the remaining samples are still
/// attempted.
///
/// # Errors
///
/// Returns the store's read error from checking whether it is empty.
///
/// # Examples
///
/// ```
/// use flysky::database::ReservationStore;
/// use flysky::operations::seed;
///
/// let mut store = ReservationStore::open_in_memory().unwrap();
/// let report = seed(&mut store, false).unwrap();
/// assert_eq!(report.inserted.len(), 5);
///
/// // Second run finds data and does nothing
/// assert!(seed(&mut store, false).unwrap().skipped);
/// ```
pub fn seed<R>(repo: &mut R, force: bool) -> Result<SeedReport>
where
    R: ReservationRepository + ?Sized,
{
    if !force && !repo.get_all()?.is_empty() {
        log::info!("store already has reservations; skipping sample data");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();
    for fields in sample_reservations() {
        match repo.add(&fields) {
            Some(id) => report.inserted.push(id),
            None => report.failed += 1,
        }
    }

    log::info!(
        "seeded {} sample reservation(s), {} failed",
        report.inserted.len(),
        report.failed
    );
    Ok(report)
}
