//! Configuration file loading for survey-tally
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./survey-tally.toml` or `./.survey-tally.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/survey-tally/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileReportConfig};
pub use loader::{ConfigLoadError, ConfigLoader};
