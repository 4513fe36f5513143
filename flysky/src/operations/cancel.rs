//! Cancelling (deleting) a reservation.

use crate::error::{Error, Operation, Result};
use crate::repository::ReservationRepository;
use crate::ReservationId;

/// Deletes reservation `id`.
///
/// Cancelling a reservation that does not exist succeeds, matching the
/// store's behaviour.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if the store reports that the delete
/// failed.
pub fn cancel<R>(repo: &mut R, id: ReservationId) -> Result<()>
where
    R: ReservationRepository + ?Sized,
{
    if repo.delete(id) {
        log::info!("cancelled reservation {id}");
        Ok(())
    } else {
        Err(Error::OperationFailed {
            operation: Operation::Delete,
        })
    }
}
