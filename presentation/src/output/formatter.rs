//! Output formatter trait

use tally_domain::{ReportFormat, SurveyReport};

/// Trait for formatting survey reports
pub trait ReportFormatter {
    /// Format the report as a human readable table
    fn format(&self, report: &SurveyReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &SurveyReport) -> String;

    /// Format in the requested `format`
    fn render(&self, report: &SurveyReport, format: ReportFormat) -> String {
        match format {
            ReportFormat::Table => self.format(report),
            ReportFormat::Json => self.format_json(report),
        }
    }
}
