//! Conducting a survey: one response per question, in order.

use super::entities::Survey;
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Result of one conduct pass over a survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConductOutcome {
    /// Questions that received a valid response
    pub answered: usize,
    /// Questions in the survey
    pub total_questions: usize,
}

impl ConductOutcome {
    /// Check if the pass stopped before reaching the last question
    pub fn is_partial(&self) -> bool {
        self.answered < self.total_questions
    }

    /// Questions left without a response in this pass
    pub fn skipped(&self) -> usize {
        self.total_questions - self.answered
    }
}

impl Survey {
    /// Run one conduct pass.
    ///
    /// For each question in insertion order, `choose` is given the question's
    /// zero-based position and the question, and returns a zero-based option
    /// index or `None` for "no valid answer". `None`, or an index the question
    /// rejects, stops the pass: the remaining questions stay unanswered.
    ///
    /// The survey is marked conducted afterwards no matter how many questions
    /// were answered, including zero.
    pub fn conduct<F>(&mut self, mut choose: F) -> ConductOutcome
    where
        F: FnMut(usize, &Question) -> Option<usize>,
    {
        let total_questions = self.questions().len();
        let mut answered = 0;

        for (position, question) in self.questions_mut().iter_mut().enumerate() {
            let Some(choice) = choose(position, &*question) else {
                break;
            };
            if question.record_response(choice).is_err() {
                break;
            }
            answered += 1;
        }

        self.mark_conducted();
        ConductOutcome {
            answered,
            total_questions,
        }
    }
}
