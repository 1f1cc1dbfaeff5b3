//! View Survey use case.

use super::shared::list_candidates;
use tally_domain::{Catalog, DisplayEntry, NotFoundError, SurveyFilter};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while viewing a survey.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewSurveyError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// One question as shown in a survey overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOverview {
    /// 1-based position in the survey
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
}

/// Read-only view of a survey's structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyOverview {
    pub title: String,
    pub conducted: bool,
    pub questions: Vec<QuestionOverview>,
}

/// Use case for showing a survey and all its questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewSurveyUseCase;

impl ViewSurveyUseCase {
    /// Any survey can be viewed
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

    pub fn execute(
        &self,
        catalog: &Catalog,
        display_index: usize,
    ) -> Result<SurveyOverview, ViewSurveyError> {
        let survey = catalog.select_by_display_index(Self::FILTER, display_index)?;
        debug!("Viewing survey \"{}\"", survey.title());

        Ok(SurveyOverview {
            title: survey.title().to_string(),
            conducted: survey.is_conducted(),
            questions: survey
                .questions()
                .iter()
                .enumerate()
                .map(|(index, question)| QuestionOverview {
                    number: index + 1,
                    text: question.text().to_string(),
                    options: question.options().to_vec(),
                })
                .collect(),
        })
    }
}
