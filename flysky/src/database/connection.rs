//! Store connection management.
//!
//! This module provides the reservation store type: one long-lived `SQLite`
//! connection, opened at process start and released exactly once.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, MAIN_DB};

use crate::error::{Error, Result};

use super::config::StoreConfig;
use super::schema::{CREATE_RESERVATIONS_TABLE, PROBE_SCHEMA};

/// Durable storage for reservations in a single `SQLite` table.
///
/// The table is created when the store opens a file that did not exist
/// before. Reads take `&self`; writes take `&mut self`, so a single store
/// never has two writers at once.
///
/// # Examples
///
/// ```no_run
/// use flysky::database::{ReservationStore, StoreConfig};
///
/// let config = StoreConfig::new("/tmp/flights.db");
/// let store = ReservationStore::open(config).unwrap();
/// store.close().unwrap();
/// ```
#[derive(Debug)]
pub struct ReservationStore {
    pub(super) conn: Connection,
    config: StoreConfig,
}

impl ReservationStore {
    /// Opens the store described by `config`.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open (or create) the database file
    /// - Configure the busy timeout
    /// - Create the `reservations` table if the file is new
    ///
    /// A file that already existed is assumed to hold the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if:
    /// - The parent directory cannot be created
    /// - The file is missing and `auto_create` is disabled
    /// - The file cannot be opened or is not a database
    /// - The file can only be opened read-only
    /// - The table cannot be created
    pub fn open(config: StoreConfig) -> Result<Self> {
        let existed = config.path.exists();
        let unavailable = |source: Box<dyn std::error::Error + Send + Sync>| {
            Error::StorageUnavailable {
                path: config.path.clone(),
                source,
            }
        };

        if config.auto_create && !existed {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| unavailable(e.into()))?;
                }
            }
        }

        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn =
            Connection::open_with_flags(&config.path, flags).map_err(|e| unavailable(e.into()))?;

        conn.busy_timeout(config.busy_timeout)
            .map_err(|e| unavailable(e.into()))?;

        // SQLite opens lazily; touching the header surfaces non-database files now
        let _: i64 = conn
            .query_row(PROBE_SCHEMA, [], |row| row.get(0))
            .map_err(|e| unavailable(e.into()))?;

        // SQLite falls back to read-only without error when write access is denied
        if conn.is_readonly(MAIN_DB).map_err(|e| unavailable(e.into()))? {
            return Err(unavailable("database file is not writable".into()));
        }

        if !existed {
            conn.execute(CREATE_RESERVATIONS_TABLE, [])
                .map_err(|e| unavailable(e.into()))?;
            log::debug!("created reservations table in {}", config.path.display());
        }

        Ok(Self { conn, config })
    }

    /// Opens a private in-memory store with the table already created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if `SQLite` cannot allocate the
    /// database.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::database::ReservationStore;
    ///
    /// let store = ReservationStore::open_in_memory().unwrap();
    /// assert!(store.get_all().unwrap().is_empty());
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let config = StoreConfig::new(":memory:");
        let unavailable = |e: rusqlite::Error| Error::StorageUnavailable {
            path: config.path.clone(),
            source: e.into(),
        };

        let conn = Connection::open_in_memory().map_err(unavailable)?;
        conn.execute(CREATE_RESERVATIONS_TABLE, [])
            .map_err(unavailable)?;

        Ok(Self { conn, config })
    }

    /// Returns the location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Releases the underlying connection.
    ///
    /// Dropping the store also releases it; `close` reports any failure to do
    /// so instead of ignoring it.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` refuses to close the connection.
    pub fn close(self) -> Result<()> {
        let path = self.config.path;
        self.conn.close().map_err(|(_, e)| Error::Database(e))?;
        log::debug!("closed reservation store {}", path.display());
        Ok(())
    }
}
