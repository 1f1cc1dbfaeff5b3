//! Progress reporting for conduct passes
//!
//! Written to stderr so the interactive prompts on stdout stay intact.

use colored::Colorize;
use tally_application::ports::progress::ConductProgressNotifier;
use tally_domain::{ConductOutcome, Question};

/// Echoes each recorded response as a one-line summary
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }

    fn start_line(title: &str, total_questions: usize) -> String {
        format!(
            "{} {} ({} questions)",
            "->".cyan(),
            title.bold(),
            total_questions
        )
    }

    fn recorded_line(position: usize, question: &Question, choice: usize) -> String {
        let option = question
            .options()
            .get(choice)
            .map(String::as_str)
            .unwrap_or("?");
        format!("  {} Q{}: {}", "v".green(), position + 1, option)
    }

    fn stopped_line(position: usize) -> String {
        format!(
            "  {} Q{}: no answer, remaining questions skipped",
            "x".red(),
            position + 1
        )
    }

    fn complete_line(outcome: &ConductOutcome) -> String {
        format!(
            "{} {}/{} answered",
            "<-".cyan(),
            outcome.answered,
            outcome.total_questions
        )
    }
}

impl ConductProgressNotifier for ConsoleProgress {
    fn on_conduct_start(&self, title: &str, total_questions: usize) {
        eprintln!("{}", Self::start_line(title, total_questions));
    }

    fn on_response_recorded(&self, position: usize, question: &Question, choice: usize) {
        eprintln!("{}", Self::recorded_line(position, question, choice));
    }

    fn on_conduct_stopped(&self, position: usize, _question: &Question) {
        eprintln!("{}", Self::stopped_line(position));
    }

    fn on_conduct_complete(&self, _title: &str, outcome: &ConductOutcome) {
        eprintln!("{}", Self::complete_line(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        colored::control::set_override(false);
        let question = Question::new("Favorite?", &["Red", "Blue"]).unwrap();

        assert_eq!(ConsoleProgress::start_line("Colors", 3), "-> Colors (3 questions)");
        assert_eq!(ConsoleProgress::recorded_line(0, &question, 1), "  v Q1: Blue");
        assert_eq!(
            ConsoleProgress::stopped_line(1),
            "  x Q2: no answer, remaining questions skipped"
        );
        assert_eq!(
            ConsoleProgress::complete_line(&ConductOutcome {
                answered: 1,
                total_questions: 3
            }),
            "<- 1/3 answered"
        );
    }
}
