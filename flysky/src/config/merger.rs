//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use flysky::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Csv));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, into one config.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.database.is_some() {
            target.database.clone_from(&source.database);
        }

        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_unset_fields_do_not_override() {
        let mut target = Config {
            database: Some(PathBuf::from("a.db")),
            busy_timeout_seconds: Some(3),
            ..Default::default()
        };
        let source = Config {
            output_format: Some(OutputFormat::Tsv),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.database, Some(PathBuf::from("a.db")));
        assert_eq!(target.busy_timeout_seconds, Some(3));
        assert_eq!(target.output_format, Some(OutputFormat::Tsv));
    }

    #[test]
    fn test_merge_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user.yaml"),
                precedence: 1,
                config: Config {
                    database: Some(PathBuf::from("user.db")),
                    disable_autoinit: Some(true),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("flysky.yaml"),
                precedence: 2,
                config: Config {
                    database: Some(PathBuf::from("project.db")),
                    ..Default::default()
                },
            },
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.database, Some(PathBuf::from("project.db")));
        assert_eq!(merged.disable_autoinit, Some(true));
    }
}
