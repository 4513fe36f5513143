//! Configuration system for flysky.
//!
//! Configuration is read from YAML files and merged with programmatic
//! overrides. Precedence, highest first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Working-directory config (`flysky.yaml`), or the file given explicitly
//! 3. User config (`~/.flysky/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use flysky::config::ConfigBuilder;
//! use flysky::ReservationStore;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let store = ReservationStore::open(config.store_config()).unwrap();
//! ```

pub mod builder;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
