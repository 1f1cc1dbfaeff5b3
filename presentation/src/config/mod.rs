//! Presentation-level configuration
//!
//! Resolved settings for report output, after config files and
//! command-line flags have been merged.

use tally_domain::{ReportFormat, ReportStyle};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// How published results are rendered
    pub format: ReportFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Layout of table rows
    pub style: ReportStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            color: true,
            style: ReportStyle::default(),
        }
    }
}

impl OutputConfig {
    /// Override the format, if one was given
    pub fn with_format(mut self, format: Option<ReportFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Force colors off when `disable` is set
    pub fn with_color_disabled(mut self, disable: bool) -> Self {
        self.color = self.color && !disable;
        self
    }
}
