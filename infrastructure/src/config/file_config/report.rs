//! Results table configuration from TOML (`[report]` section)

use serde::{Deserialize, Serialize};
use tally_domain::{ConfigIssue, ReportStyle};

/// Widest option column accepted from a config file
const MAX_LABEL_WIDTH: usize = 200;

/// Raw results table configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Percentage points per bar mark
    pub bar_step: u32,
    /// Bar character; must be exactly one character
    pub bar_mark: String,
    /// Minimum width of the option column (1-200)
    pub label_width: usize,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        let style = ReportStyle::default();
        Self {
            bar_step: style.bar_step,
            bar_mark: style.bar_mark.to_string(),
            label_width: style.label_width,
        }
    }
}

impl FileReportConfig {
    /// Convert to a [`ReportStyle`], falling back to defaults for bad values
    pub fn to_report_style(&self) -> (ReportStyle, Vec<ConfigIssue>) {
        let defaults = ReportStyle::default();
        let mut issues = Vec::new();

        let bar_step = if (1..=100).contains(&self.bar_step) {
            self.bar_step
        } else {
            issues.push(ConfigIssue::invalid_value(
                "report.bar_step",
                self.bar_step.to_string(),
                format!(
                    "report.bar_step: {} is outside 1-100, falling back to {}",
                    self.bar_step, defaults.bar_step
                ),
            ));
            defaults.bar_step
        };

        let mut chars = self.bar_mark.chars();
        let bar_mark = match (chars.next(), chars.next()) {
            (Some(mark), None) if !mark.is_whitespace() => mark,
            _ => {
                issues.push(ConfigIssue::invalid_value(
                    "report.bar_mark",
                    self.bar_mark.clone(),
                    format!(
                        "report.bar_mark: '{}' is not a single visible character, falling back to '{}'",
                        self.bar_mark, defaults.bar_mark
                    ),
                ));
                defaults.bar_mark
            }
        };

        let label_width = if (1..=MAX_LABEL_WIDTH).contains(&self.label_width) {
            self.label_width
        } else {
            issues.push(ConfigIssue::invalid_value(
                "report.label_width",
                self.label_width.to_string(),
                format!(
                    "report.label_width: {} is outside 1-{}, falling back to {}",
                    self.label_width, MAX_LABEL_WIDTH, defaults.label_width
                ),
            ));
            defaults.label_width
        };

        (
            ReportStyle {
                bar_step,
                bar_mark,
                label_width,
            },
            issues,
        )
    }
}
