//! Console output formatter for survey reports

use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use tally_application::SurveyOverview;
use tally_domain::{QuestionOutcome, ReportStyle, SurveyReport};

/// Formats reports and overviews for console display
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    style: ReportStyle,
}

impl ConsoleFormatter {
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// One results row: `<option> : <count> (<pct>%) <bar>`
    pub fn format_row(&self, option: &str, count: usize, percentage: f64) -> String {
        format!(
            "{:<width$} : {:>2} ({:.1}%) {}",
            option,
            count,
            percentage,
            self.style.bar(percentage).green(),
            width = self.style.label_width
        )
    }

    /// Every question of a survey with its numbered options
    pub fn format_overview(overview: &SurveyOverview) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "Survey Title:".cyan().bold(),
            overview.title
        ));

        if overview.questions.is_empty() {
            output.push_str("No questions added yet.\n");
            return output;
        }

        for question in &overview.questions {
            output.push_str(&format!(
                "\n{}\n",
                format!("Q{}: {}", question.number, question.text).bold()
            ));
            for (i, option) in question.options.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, option));
            }
        }

        output.push_str("\nEnd of survey details.\n");
        output
    }

    /// Numbered list of survey titles for a selection prompt
    pub fn format_listing<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| format!("{}. {}\n", i + 1, title))
            .collect()
    }

    fn header(title: &str) -> String {
        format!("====== Results for \"{}\" ======", title)
            .cyan()
            .bold()
            .to_string()
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &SurveyReport) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&Self::header(&report.title));
        output.push('\n');

        for question in &report.questions {
            output.push_str(&format!(
                "\n{}\n",
                format!("Q{}: {}", question.number, question.text).bold()
            ));

            match &question.outcome {
                QuestionOutcome::NoResponses => {
                    output.push_str(&format!("{}\n", "No responses recorded.".yellow()));
                }
                QuestionOutcome::Tallied { options, .. } => {
                    for result in options {
                        output.push_str(&self.format_row(
                            &result.option,
                            result.count,
                            result.percentage,
                        ));
                        output.push('\n');
                    }
                }
            }
        }

        output.push_str(&format!("\nEnd of results for: {}\n", report.title));
        output
    }

    fn format_json(&self, report: &SurveyReport) -> String {
        let mut json = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        json.push('\n');
        json
    }
}
