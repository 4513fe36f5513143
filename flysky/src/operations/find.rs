//! Searching from the reservations list.

use crate::error::Result;
use crate::repository::ReservationRepository;
use crate::Reservation;

/// Finds reservations matching a user-entered search term.
///
/// The term is trimmed. A blank term lists every reservation; anything else
/// is a substring search over name, flight number, departure, and
/// destination.
///
/// # Errors
///
/// Returns the store's read error.
///
/// # Examples
///
/// ```
/// use flysky::database::ReservationStore;
/// use flysky::operations::find;
/// use flysky::ReservationFields;
///
/// let mut store = ReservationStore::open_in_memory().unwrap();
/// store.add(&ReservationFields::new("Alice", "FL1", "Oslo", "Rome", "d", "1A"));
/// store.add(&ReservationFields::new("Bob", "FL2", "Oslo", "Rome", "d", "1B"));
///
/// assert_eq!(find(&store, "   ").unwrap().len(), 2);
/// assert_eq!(find(&store, " Bob ").unwrap().len(), 1);
/// ```
pub fn find<R>(repo: &R, term: &str) -> Result<Vec<Reservation>>
where
    R: ReservationRepository + ?Sized,
{
    let term = term.trim();
    if term.is_empty() {
        repo.get_all()
    } else {
        repo.search(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockReservationRepository;

    #[test]
    fn test_blank_term_lists_all() {
        let mut repo = MockReservationRepository::new();
        repo.expect_search().never();
        repo.expect_get_all().times(1).returning(|| Ok(Vec::new()));

        assert!(find(&repo, " \t ").unwrap().is_empty());
    }

    #[test]
    fn test_term_is_trimmed() {
        let mut repo = MockReservationRepository::new();
        repo.expect_get_all().never();
        repo.expect_search()
            .withf(|term: &str| term == "FL100")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        find(&repo, "  FL100 ").unwrap();
    }
}
