//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod report;

pub use output::FileOutputConfig;
pub use report::FileReportConfig;

use serde::{Deserialize, Serialize};
use tally_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Results table settings
    pub report: FileReportConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is a warning: the offending value is replaced by its
    /// default when the configuration is applied.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.report.to_report_style().1
    }

    /// Render the configuration back to TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
