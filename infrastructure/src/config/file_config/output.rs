//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use tally_domain::ReportFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Results format; `None` means the table layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: None,
        }
    }
}
