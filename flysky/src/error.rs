//! Error types for the flysky library.
//!
//! This module provides the error hierarchy for reservation storage and the
//! booking workflows, using `thiserror` for ergonomic error handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::reservation::{ReservationId, ValidationError};

/// Result type alias for operations that may fail with a flysky error.
///
/// # Examples
///
/// ```
/// use flysky::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flysky library.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing database file cannot be opened, created, or written.
    #[error("storage unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        /// Location of the backing file.
        path: PathBuf,
        /// The underlying fault.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A store write reported failure.
    ///
    /// The underlying fault has already been logged by the store and is not
    /// carried here.
    #[error("failed to {operation} reservation")]
    OperationFailed {
        /// The write that failed.
        operation: Operation,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No reservation has the requested identifier.
    #[error("reservation {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: ReservationId,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The store write an [`Error::OperationFailed`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Inserting a new reservation.
    Add,
    /// Overwriting an existing reservation.
    Update,
    /// Removing a reservation.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::{Error, ReservationId};
    ///
    /// let err = Error::NotFound { id: ReservationId::new(7) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_unavailable_error() {
        let err = Error::StorageUnavailable {
            path: PathBuf::from("/nonexistent/flights.db"),
            source: Box::new(rusqlite::Error::InvalidQuery),
        };
        let display = format!("{err}");
        assert!(display.contains("storage unavailable"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/nonexistent/flights.db"));
    }

    #[test]
    fn test_operation_failed_error() {
        let err = Error::OperationFailed {
            operation: Operation::Update,
        };
        assert_eq!(format!("{err}"), "failed to update reservation");
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            id: ReservationId::new(42),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "seat_number".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("seat_number"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = ValidationError {
            field: "name".into(),
            message: "required".into(),
        }
        .into();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Add.to_string(), "add");
        assert_eq!(Operation::Update.to_string(), "update");
        assert_eq!(Operation::Delete.to_string(), "delete");
    }
}
