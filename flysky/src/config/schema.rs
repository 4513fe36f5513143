//! Configuration schema definitions.
//!
//! This module defines the configuration structure for flysky: where the
//! reservations database lives, how long to wait on a locked database, and
//! how listings are printed.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::StoreConfig;
use crate::error::{Error, Result};

/// Complete configuration structure.
///
/// Every field is optional so that files can set only what they care about
/// and be layered on top of each other.
///
/// # Examples
///
/// ```
/// use flysky::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("database: /tmp/flights.db\noutput_format: json\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the reservations database file.
    pub database: Option<PathBuf>,

    /// Maximum time to wait for a locked database (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Output format for listings.
    pub output_format: Option<OutputFormat>,

    /// Refuse to create the database file if it is missing.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Checks the values that can be wrong independently of the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `database` is an empty path or
    /// `busy_timeout_seconds` is zero.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref database) = self.database {
            if database.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "database".into(),
                    message: "database path must not be empty".into(),
                });
            }
        }

        if self.busy_timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: "busy timeout must be at least one second".into(),
            });
        }

        Ok(())
    }

    /// Builds the store configuration these settings describe.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::config::Config;
    /// use std::path::PathBuf;
    ///
    /// let store = Config::default().store_config();
    /// assert_eq!(store.path, PathBuf::from("flights.db"));
    /// assert!(store.auto_create);
    /// ```
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        let mut store = match self.database {
            Some(ref path) => StoreConfig::new(path),
            None => StoreConfig::default(),
        };

        if let Some(seconds) = self.busy_timeout_seconds {
            store = store.with_busy_timeout(Duration::from_secs(seconds));
        }

        if self.disable_autoinit == Some(true) {
            store = store.existing_only();
        }

        store
    }
}

/// Output format for reservation listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
