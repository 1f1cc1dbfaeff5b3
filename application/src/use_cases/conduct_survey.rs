//! Conduct Survey use case.
//!
//! Records one response per question for a survey that has questions.
//!
//! The pass is best effort: when the [`ResponseProvider`] has no valid
//! answer for a question (or fails), the remaining questions are left
//! unanswered, and the survey is still marked conducted.

use super::shared::list_candidates;
use crate::ports::progress::ConductProgressNotifier;
use crate::ports::response_provider::{Answer, ResponseProvider};
use tally_domain::{Catalog, ConductOutcome, DisplayEntry, NotFoundError, Survey, SurveyFilter};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur before a conduct pass starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConductSurveyError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Output of the [`ConductSurveyUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConductSurveyOutput {
    pub title: String,
    pub outcome: ConductOutcome,
}

/// Use case for running one conduct pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConductSurveyUseCase;

impl ConductSurveyUseCase {
    /// Only surveys with questions can be conducted
    pub const FILTER: SurveyFilter = SurveyFilter::HasQuestions;

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

    /// Select the survey shown as `display_index` and conduct it
    pub fn execute(
        &self,
        catalog: &mut Catalog,
        display_index: usize,
        responses: &mut dyn ResponseProvider,
        progress: &dyn ConductProgressNotifier,
    ) -> Result<ConductSurveyOutput, ConductSurveyError> {
        let survey = catalog.select_by_display_index_mut(Self::FILTER, display_index)?;
        let outcome = self.conduct(survey, responses, progress);
        Ok(ConductSurveyOutput {
            title: survey.title().to_string(),
            outcome,
        })
    }

    /// Conduct an already selected survey
    pub fn conduct(
        &self,
        survey: &mut Survey,
        responses: &mut dyn ResponseProvider,
        progress: &dyn ConductProgressNotifier,
    ) -> ConductOutcome {
        let title = survey.title().to_string();
        info!("Conducting survey \"{}\"", title);
        progress.on_conduct_start(&title, survey.questions().len());

        let outcome = survey.conduct(|position, question| {
            let answer = match responses.answer(position, question) {
                Ok(answer) => answer,
                Err(e) => {
                    warn!("No response for question {}: {}", position + 1, e);
                    Answer::NoAnswer
                }
            };

            match answer {
                Answer::Choice(choice) if choice < question.num_options() => {
                    debug!("Question {}: option {}", position + 1, choice + 1);
                    progress.on_response_recorded(position, question, choice);
                    Some(choice)
                }
                Answer::Choice(choice) => {
                    warn!(
                        "Question {}: choice {} out of range, stopping",
                        position + 1,
                        choice + 1
                    );
                    progress.on_conduct_stopped(position, question);
                    None
                }
                Answer::NoAnswer => {
                    debug!("Question {}: no answer, stopping", position + 1);
                    progress.on_conduct_stopped(position, question);
                    None
                }
            }
        });

        if outcome.is_partial() {
            info!(
                "Survey \"{}\" conducted partially ({}/{} answered)",
                title, outcome.answered, outcome.total_questions
            );
        } else {
            info!("Survey \"{}\" conducted", title);
        }
        progress.on_conduct_complete(&title, &outcome);
        outcome
    }
}
