//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store management, and prompting.

use crate::error::CliError;
use flysky::{Config, ConfigBuilder, OutputFormat, ReservationStore};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the database location.
    pub database: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl GlobalOptions {
    /// The configuration layer contributed by command-line flags.
    fn as_overrides(&self) -> Config {
        Config {
            database: self.database.clone(),
            busy_timeout_seconds: self.busy_timeout,
            output_format: None,
            disable_autoinit: self.disable_autoinit.then_some(true),
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. The `--config` file, or `flysky.yaml` in the working directory
/// 3. `~/.flysky/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .with_config(global.as_overrides())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store described by `config`.
///
/// # Errors
///
/// Returns `NoDatabase` if the database doesn't exist and auto-init is disabled.
pub fn open_store(config: &Config) -> Result<ReservationStore, CliError> {
    let store_config = config.store_config();

    if !store_config.auto_create && !store_config.path.exists() {
        return Err(CliError::NoDatabase(store_config.path));
    }

    log::debug!("opening reservation store at {}", store_config.path.display());
    ReservationStore::open(store_config).map_err(CliError::from)
}

/// Pick the output format: the command's flag, then configuration, then table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Ask a yes/no question; anything other than `y` or `yes` is a no.
///
/// The prompt goes to `output` and the answer is read from `input`, so the
/// caller decides which streams are used.
pub fn confirm<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool, CliError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_yes() {
        for answer in ["y\n", "YES\n", "  yes  \n"] {
            let mut out = Vec::new();
            assert!(confirm("Cancel?", &mut Cursor::new(answer), &mut out).unwrap());
            assert_eq!(String::from_utf8(out).unwrap(), "Cancel? [y/N] ");
        }
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        for answer in ["\n", "n\n", "maybe\n", ""] {
            let mut out = Vec::new();
            assert!(!confirm("Cancel?", &mut Cursor::new(answer), &mut out).unwrap());
        }
    }

    #[test]
    fn test_resolve_format_precedence() {
        let config = Config {
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Csv);
        assert_eq!(
            resolve_format(None, &Config::default()),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_overrides_only_set_flags() {
        let global = GlobalOptions {
            busy_timeout: Some(4),
            ..Default::default()
        };
        let overrides = global.as_overrides();
        assert_eq!(overrides.busy_timeout_seconds, Some(4));
        assert_eq!(overrides.database, None);
        assert_eq!(overrides.disable_autoinit, None);
    }

    #[test]
    fn test_open_store_refuses_missing_file_without_autoinit() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: Some(dir.path().join("missing.db")),
            disable_autoinit: Some(true),
            ..Default::default()
        };

        let err = open_store(&config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
