//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Direct database access for checking what the CLI wrote

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated database and working directory.
///
/// Commands run with the temporary directory as their working directory and
/// `HOME`, so no configuration file outside the test is picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the reservations database
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The database path is not created yet; flysky creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let db_path = temp_path.join("data").join("flights.db");

        Self {
            temp_dir,
            temp_path,
            db_path,
        }
    }

    /// Get a bare command builder without the `--database` flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flysky").expect("Failed to find flysky binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("FLYSKY_LOG_MODE");
        cmd
    }

    /// Get a command builder with the database pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--database").arg(&self.db_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Book a reservation and return its id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print a valid id.
    pub fn book(&self, name: &str, flight: &str, departure: &str, destination: &str) -> i64 {
        let output = self
            .command()
            .args(["book", "--name", name, "--flight-number", flight])
            .args(["--departure", departure, "--destination", destination])
            .args(["--date", "2025-10-15", "--seat", "12A"])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Book the default Jane Doe reservation.
    pub fn book_jane(&self) -> i64 {
        self.book("Jane Doe", "FL100", "New York", "London")
    }

    /// List all reservations as JSON.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("List output is not JSON")
    }

    /// Open the database directly.
    pub fn connection(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(&self.db_path).expect("Failed to open database")
    }

    /// Number of rows in the reservations table.
    pub fn row_count(&self) -> i64 {
        self.connection()
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .expect("Failed to count reservations")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to parse a reservation id from `book` output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .expect("Output is not a valid reservation id")
}
