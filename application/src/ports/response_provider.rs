//! Response provider port for conducting surveys.
//!
//! This module defines the port (interface) through which a conduct pass
//! obtains one answer per question.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ResponseProvider`] - defined here in application layer
//! - **Adapter**: `InteractiveResponder` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! ConductSurveyUseCase
//!        ↓
//! for each question, in order:
//!        ↓
//! ResponseProvider::answer()
//!        ↓
//! Choice(i)  → record, continue
//! NoAnswer   → stop, remaining questions stay unanswered
//! Err(_)     → treated like NoAnswer
//! ```
//!
//! # Built-in Implementations
//!
//! - [`ScriptedResponses`] - Replays a fixed list of answers

use std::collections::VecDeque;
use tally_domain::Question;
use thiserror::Error;

/// One respondent's reaction to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Zero-based index into the question's options
    Choice(usize),
    /// No valid answer; ends the pass early
    NoAnswer,
}

/// Failure while obtaining an answer, as opposed to the respondent
/// declining to give one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseProviderError {
    /// Input source closed before an answer arrived
    #[error("Input closed")]
    Closed,

    /// Input/output error (e.g., terminal read failure)
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for obtaining answers during a conduct pass.
///
/// Implementations are responsible for:
/// 1. Presenting the question and its options
/// 2. Collecting the respondent's choice
/// 3. Returning [`Answer::NoAnswer`] when the choice is missing or invalid
pub trait ResponseProvider {
    /// Answer the question at zero-based `position` in the survey
    fn answer(
        &mut self,
        position: usize,
        question: &Question,
    ) -> Result<Answer, ResponseProviderError>;
}

/// Replays a fixed sequence of answers, then answers `NoAnswer`.
///
/// Useful for tests and for non-interactive callers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResponses {
    answers: VecDeque<Answer>,
}

impl ScriptedResponses {
    /// Script of zero-based choices, one per question
    pub fn choices(choices: impl IntoIterator<Item = usize>) -> Self {
        Self::answers(choices.into_iter().map(Answer::Choice))
    }

    pub fn answers(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Answers not yet handed out
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ResponseProvider for ScriptedResponses {
    fn answer(
        &mut self,
        _position: usize,
        _question: &Question,
    ) -> Result<Answer, ResponseProviderError> {
        Ok(self.answers.pop_front().unwrap_or(Answer::NoAnswer))
    }
}
