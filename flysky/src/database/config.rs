//! Store configuration and connection parameters.
//!
//! This module provides configuration types for opening a reservation store,
//! including the default file location.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name used when no database location is configured.
pub const DEFAULT_DATABASE_FILE: &str = "flights.db";

/// Configuration for opening a [`ReservationStore`](super::ReservationStore).
///
/// # Examples
///
/// ```
/// use flysky::database::StoreConfig;
/// use std::time::Duration;
///
/// // Create a configuration with default settings
/// let config = StoreConfig::new("/tmp/flights.db");
///
/// // Customize the configuration
/// let config = StoreConfig::new("/tmp/flights.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the database file (and its parent directory) if it
    /// doesn't exist.
    pub auto_create: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::database::StoreConfig;
    ///
    /// let config = StoreConfig::new("/tmp/flights.db");
    /// assert_eq!(config.path.to_str().unwrap(), "/tmp/flights.db");
    /// assert!(config.auto_create);
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Refuses to create a missing database file.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::database::StoreConfig;
    ///
    /// let config = StoreConfig::new("/tmp/flights.db").existing_only();
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn existing_only(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_FILE)
    }
}
