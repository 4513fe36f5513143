//! Builder for assembling the effective configuration.

use std::path::{Path, PathBuf};

use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Assembles a [`Config`] from files and programmatic overrides.
///
/// Sources are applied lowest precedence first:
///
/// 1. Built-in defaults
/// 2. `~/.flysky/config.yaml`
/// 3. `flysky.yaml` in the working directory, or the explicit config file
/// 4. Overrides passed to [`with_config`](Self::with_config)
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files relative to the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks for `flysky.yaml` in `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Reads the user configuration from `dir` instead of `~/.flysky`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.user_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Uses `path` in place of the working directory's `flysky.yaml`.
    ///
    /// Unlike the discovered files, an explicit file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignores every configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Layers `config` on top of everything added so far.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges, and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, or
    /// if the merged configuration fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flysky::config::{Config, ConfigBuilder};
    /// use std::path::PathBuf;
    ///
    /// let config = ConfigBuilder::new()
    ///     .skip_files()
    ///     .with_config(Config {
    ///         database: Some(PathBuf::from("/tmp/flights.db")),
    ///         ..Default::default()
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.database, Some(PathBuf::from("/tmp/flights.db")));
    /// ```
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let user_dir = self.user_dir.as_deref();
            let sources = match self.config_file {
                // An explicit file stands in for the working directory's file
                Some(path) => {
                    let mut sources: Vec<_> =
                        ConfigLoader::load_user_config(user_dir)?.into_iter().collect();
                    let config = ConfigLoader::load_file(&path)?;
                    sources.push(ConfigSource {
                        path,
                        precedence: 2,
                        config,
                    });
                    sources
                }
                None => {
                    let working_dir = match self.working_dir {
                        Some(dir) => dir,
                        None => std::env::current_dir()?,
                    };
                    ConfigLoader::load_all(&working_dir, user_dir)?
                }
            };

            for source in &sources {
                log::debug!("loading configuration from {}", source.path.display());
            }
            config = ConfigMerger::merge(sources);
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        config.validate()?;
        Ok(config)
    }
}
