//! Domain error types

use crate::catalog::SurveyFilter;
use crate::core::limits::{MAX_OPTIONS, MIN_OPTIONS};
use thiserror::Error;

/// Rejected input for a survey, question or response.
///
/// Empty option text is not an error: it is replaced with
/// [`EMPTY_OPTION_PLACEHOLDER`](crate::limits::EMPTY_OPTION_PLACEHOLDER).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Survey title cannot be empty")]
    EmptyTitle,

    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error(
        "Invalid option count {0} (expected {min}-{max})",
        min = MIN_OPTIONS,
        max = MAX_OPTIONS
    )]
    OptionCount(usize),

    #[error("Choice {choice} is out of range (question has {available} options)")]
    ChoiceOutOfRange { choice: usize, available: usize },
}

/// A survey selection that matched nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("No surveys available")]
    NoSurveys,

    #[error("{}", .0.empty_message())]
    NoMatches(SurveyFilter),

    #[error("Invalid selection: {index} (expected 1-{available})")]
    OutOfRange { index: usize, available: usize },
}

impl NotFoundError {
    /// Check if the selection failed because there was nothing to select from
    pub fn is_empty_listing(&self) -> bool {
        matches!(self, NotFoundError::NoSurveys | NotFoundError::NoMatches(_))
    }
}
