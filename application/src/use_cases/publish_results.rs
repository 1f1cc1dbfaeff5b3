//! Publish Results use case.

use super::shared::list_candidates;
use tally_domain::{Catalog, DisplayEntry, NotFoundError, Survey, SurveyFilter, SurveyReport};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while publishing results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Survey \"{0}\" has not been conducted yet")]
    NotConducted(String),
}

/// Use case for computing the report of a conducted survey.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishResultsUseCase;

impl PublishResultsUseCase {
    /// Only conducted surveys have results
    pub const FILTER: SurveyFilter = SurveyFilter::Conducted;

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

    /// Select the survey shown as `display_index` and report on it
    pub fn execute(
        &self,
        catalog: &Catalog,
        display_index: usize,
    ) -> Result<SurveyReport, PublishError> {
        let survey = catalog.select_by_display_index(Self::FILTER, display_index)?;
        self.report(survey)
    }

    /// Report on an already selected survey
    pub fn report(&self, survey: &Survey) -> Result<SurveyReport, PublishError> {
        if !survey.is_conducted() {
            return Err(PublishError::NotConducted(survey.title().to_string()));
        }
        let report = survey.report();
        info!(
            "Published results for \"{}\" ({} questions)",
            report.title,
            report.questions.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_domain::{OptionResult, QuestionOutcome};

    fn colors_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let survey = catalog.create_survey("Colors").unwrap();
        survey.append_question("Favorite?", &["Red", "Blue"]).unwrap();
        catalog
    }

    #[test]
    fn test_colors_end_to_end() {
        let mut catalog = colors_catalog();
        for choice in [0, 1] {
            catalog
                .select_by_display_index_mut(SurveyFilter::HasQuestions, 1)
                .unwrap()
                .conduct(|_, _| Some(choice));
        }

        let report = PublishResultsUseCase::new().execute(&catalog, 1).unwrap();
        assert_eq!(
            report.questions[0].outcome,
            QuestionOutcome::Tallied {
                total: 2,
                options: vec![
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
            }
        );
    }

    #[test]
    fn test_unconducted_survey_not_listed() {
        let catalog = colors_catalog();
        let use_case = PublishResultsUseCase::new();
        assert_eq!(
            use_case.candidates(&catalog).unwrap_err(),
            NotFoundError::NoMatches(SurveyFilter::Conducted)
        );
        assert!(matches!(
            use_case.execute(&catalog, 1),
            Err(PublishError::NotFound(_))
        ));
    }

    #[test]
    fn test_report_refuses_unconducted_survey() {
        let survey = Survey::new("Fresh").unwrap();
        assert_eq!(
            PublishResultsUseCase::new().report(&survey).unwrap_err(),
            PublishError::NotConducted("Fresh".to_string())
        );
    }
}
