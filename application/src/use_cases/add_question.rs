//! Add Question use case.
//!
//! Appends one question to an existing survey. Interactive callers collect
//! questions one at a time and may reject a draft early with
//! [`AddQuestionUseCase::check_text`] and [`AddQuestionUseCase::check_option_count`]
//! before prompting for the rest of it; [`AddQuestionUseCase::execute`]
//! validates the full draft again either way.

use super::shared::list_candidates;
use tally_domain::{Catalog, DisplayEntry, NotFoundError, Question, SurveyFilter, ValidationError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while adding a question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddQuestionError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Raw question input before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
}

impl QuestionDraft {
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Output of the [`AddQuestionUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddQuestionOutput {
    pub survey_title: String,
    /// 1-based number of the new question within its survey
    pub question_number: usize,
}

/// Use case for appending a question to a survey chosen from all surveys.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddQuestionUseCase;

impl AddQuestionUseCase {
    /// Any survey can receive questions
    pub const FILTER: SurveyFilter = SurveyFilter::Any;

    pub fn new() -> Self {
        Self
    }

    /// Surveys the user can pick from
    pub fn candidates<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<Vec<DisplayEntry<'a>>, NotFoundError> {
        list_candidates(catalog, Self::FILTER)
    }

    pub fn check_text(&self, text: &str) -> Result<(), ValidationError> {
        Question::validate_text(text)
    }

    pub fn check_option_count(&self, count: usize) -> Result<(), ValidationError> {
        Question::validate_option_count(count)
    }

    pub fn execute(
        &self,
        catalog: &mut Catalog,
        display_index: usize,
        draft: &QuestionDraft,
    ) -> Result<AddQuestionOutput, AddQuestionError> {
        let survey = catalog.select_by_display_index_mut(Self::FILTER, display_index)?;

        let appended = survey
            .append_question(&draft.text, draft.options.as_slice())
            .map(|_| ());
        if let Err(e) = appended {
            warn!("Question not added to \"{}\": {}", survey.title(), e);
            return Err(e.into());
        }

        let question_number = survey.questions().len();
        debug!(
            "Question {} has {} options",
            question_number,
            draft.options.len()
        );
        info!(
            "Added question {} to survey \"{}\"",
            question_number,
            survey.title()
        );

        Ok(AddQuestionOutput {
            survey_title: survey.title().to_string(),
            question_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(titles: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        for title in titles {
            catalog.create_survey(title).unwrap();
        }
        catalog
    }

    #[test]
    fn test_add_questions_in_order() {
        let mut catalog = catalog_with(&["Colors"]);
        let use_case = AddQuestionUseCase::new();

        let first = use_case
            .execute(&mut catalog, 1, &QuestionDraft::new("Favorite?", ["Red", "Blue"]))
            .unwrap();
        let second = use_case
            .execute(&mut catalog, 1, &QuestionDraft::new("Least?", ["Red", "Blue"]))
            .unwrap();

        assert_eq!(first.question_number, 1);
        assert_eq!(second.question_number, 2);
        assert_eq!(second.survey_title, "Colors");

        let survey = catalog.select_by_display_index(SurveyFilter::Any, 1).unwrap();
        let texts: Vec<_> = survey.questions().iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["Favorite?", "Least?"]);
    }

    #[test]
    fn test_targets_display_index() {
        // Display order is B, A
        let mut catalog = catalog_with(&["A", "B"]);
        let output = AddQuestionUseCase::new()
            .execute(&mut catalog, 2, &QuestionDraft::new("Q", ["x", "y"]))
            .unwrap();
        assert_eq!(output.survey_title, "A");
    }

    #[test]
    fn test_six_options_rejected() {
        let mut catalog = catalog_with(&["S"]);
        let draft = QuestionDraft::new("Q", ["1", "2", "3", "4", "5", "6"]);
        let err = AddQuestionUseCase::new()
            .execute(&mut catalog, 1, &draft)
            .unwrap_err();
        assert_eq!(
            err,
            AddQuestionError::Validation(ValidationError::OptionCount(6))
        );
        let survey = catalog.select_by_display_index(SurveyFilter::Any, 1).unwrap();
        assert!(!survey.has_questions());
    }

    #[test]
    fn test_one_option_rejected() {
        let mut catalog = catalog_with(&["S"]);
        let err = AddQuestionUseCase::new()
            .execute(&mut catalog, 1, &QuestionDraft::new("Q", ["only"]))
            .unwrap_err();
        assert_eq!(
            err,
            AddQuestionError::Validation(ValidationError::OptionCount(1))
        );
    }

    #[test]
    fn test_empty_option_becomes_placeholder() {
        let mut catalog = catalog_with(&["S"]);
        AddQuestionUseCase::new()
            .execute(&mut catalog, 1, &QuestionDraft::new("Q", ["Yes", ""]))
            .unwrap();
        let survey = catalog.select_by_display_index(SurveyFilter::Any, 1).unwrap();
        assert_eq!(survey.questions()[0].options()[1], "(empty option)");
    }

    #[test]
    fn test_unknown_survey() {
        let mut catalog = catalog_with(&["S"]);
        let err = AddQuestionUseCase::new()
            .execute(&mut catalog, 4, &QuestionDraft::new("Q", ["a", "b"]))
            .unwrap_err();
        assert_eq!(
            err,
            AddQuestionError::NotFound(NotFoundError::OutOfRange {
                index: 4,
                available: 1
            })
        );
    }

    #[test]
    fn test_early_checks() {
        let use_case = AddQuestionUseCase::new();
        assert!(use_case.check_text("").is_err());
        assert!(use_case.check_text("Why?").is_ok());
        assert!(use_case.check_option_count(1).is_err());
        assert!(use_case.check_option_count(3).is_ok());
    }
}
