//! Survey report value objects
//!
//! A report is a read-only snapshot of a survey's tallies: per question, the
//! count and share of every option in display order.

use super::entities::Survey;
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Count and share of one option (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionResult {
    pub option: String,
    pub count: usize,
    /// `count / total * 100`
    pub percentage: f64,
}

/// What a question's tally says
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuestionOutcome {
    /// Nothing recorded yet; no percentages are computed
    NoResponses,
    /// At least one response recorded
    Tallied {
        total: usize,
        options: Vec<OptionResult>,
    },
}

/// Results for one question (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionReport {
    /// 1-based position in the survey
    pub number: usize,
    pub text: String,
    pub outcome: QuestionOutcome,
}

impl QuestionReport {
    fn from_question(number: usize, question: &Question) -> Self {
        let total = question.tally().total();
        let outcome = if total == 0 {
            QuestionOutcome::NoResponses
        } else {
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let count = question.count_for(index);
                    OptionResult {
                        option: option.clone(),
                        count,
                        percentage: count as f64 / total as f64 * 100.0,
                    }
                })
                .collect();
            QuestionOutcome::Tallied { total, options }
        };

        Self {
            number,
            text: question.text().to_string(),
            outcome,
        }
    }

    pub fn has_responses(&self) -> bool {
        matches!(self.outcome, QuestionOutcome::Tallied { .. })
    }
}

/// Results for a whole survey (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub title: String,
    pub questions: Vec<QuestionReport>,
}

impl Survey {
    /// Compute per-option counts and percentages, questions in insertion order
    pub fn report(&self) -> SurveyReport {
        SurveyReport {
            title: self.title().to_string(),
            questions: self
                .questions()
                .iter()
                .enumerate()
                .map(|(index, question)| QuestionReport::from_question(index + 1, question))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_of(report: &QuestionReport) -> &[OptionResult] {
        match &report.outcome {
            QuestionOutcome::Tallied { options, .. } => options,
            QuestionOutcome::NoResponses => panic!("expected tallied outcome"),
        }
    }

    #[test]
    fn test_colors_report_splits_evenly() {
        let mut survey = Survey::new("Colors").unwrap();
        survey.append_question("Favorite?", &["Red", "Blue"]).unwrap();
        survey.conduct(|_, _| Some(0));
        survey.conduct(|_, _| Some(1));

        let report = survey.report();
        assert_eq!(report.title, "Colors");
        assert_eq!(report.questions.len(), 1);

        let question = &report.questions[0];
        assert_eq!(question.number, 1);
        assert_eq!(question.text, "Favorite?");
        assert_eq!(
            options_of(question),
            &[
                OptionResult {
                    option: "Red".to_string(),
                    count: 1,
                    percentage: 50.0
                },
                OptionResult {
                    option: "Blue".to_string(),
                    count: 1,
                    percentage: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_unanswered_question_has_no_percentages() {
        let mut survey = Survey::new("S").unwrap();
        survey.append_question("Q1", &["a", "b"]).unwrap();
        survey.append_question("Q2", &["c", "d"]).unwrap();
        survey.conduct(|position, _| (position == 0).then_some(1));

        let report = survey.report();
        assert!(report.questions[0].has_responses());
        assert_eq!(report.questions[1].outcome, QuestionOutcome::NoResponses);
        assert_eq!(report.questions[1].number, 2);
    }

    #[test]
    fn test_percentage_is_count_over_total() {
        let mut survey = Survey::new("S").unwrap();
        survey.append_question("Q", &["a", "b", "c"]).unwrap();
        for choice in [0, 0, 1] {
            survey.conduct(|_, _| Some(choice));
        }

        let report = survey.report();
        let options = options_of(&report.questions[0]);
        assert_eq!(options[0].count, 2);
        assert!((options[0].percentage - 2.0 / 3.0 * 100.0).abs() < 1e-9);
        assert!((options[1].percentage - 1.0 / 3.0 * 100.0).abs() < 1e-9);
        assert_eq!(options[2].count, 0);
        assert_eq!(options[2].percentage, 0.0);
        match &report.questions[0].outcome {
            QuestionOutcome::Tallied { total, .. } => assert_eq!(*total, 3),
            QuestionOutcome::NoResponses => panic!("expected tallied outcome"),
        }
    }

    #[test]
    fn test_report_follows_option_display_order() {
        let mut survey = Survey::new("S").unwrap();
        survey.append_question("Q", &["Zebra", "Apple"]).unwrap();
        survey.conduct(|_, _| Some(0));

        let report = survey.report();
        let names: Vec<_> = options_of(&report.questions[0])
            .iter()
            .map(|o| o.option.as_str())
            .collect();
        assert_eq!(names, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_report_serializes_with_status_tag() {
        let mut survey = Survey::new("S").unwrap();
        survey.append_question("Q", &["a", "b"]).unwrap();
        let json = serde_json::to_value(survey.report()).unwrap();
        assert_eq!(json["questions"][0]["outcome"]["status"], "no_responses");
    }
}
