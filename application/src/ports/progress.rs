//! Progress notification port
//!
//! Defines the interface for reporting progress while a survey is conducted.

use tally_domain::{ConductOutcome, Question};

/// Callback for progress updates during a conduct pass
///
/// Implementations live in the presentation layer. Every method defaults to
/// a no-op so adapters only override what they display.
pub trait ConductProgressNotifier {
    /// Called before the first question is asked
    fn on_conduct_start(&self, _title: &str, _total_questions: usize) {}

    /// Called after a response is recorded for the question at `position`
    fn on_response_recorded(&self, _position: usize, _question: &Question, _choice: usize) {}

    /// Called when the pass stops early at `position`
    fn on_conduct_stopped(&self, _position: usize, _question: &Question) {}

    /// Called once the survey has been marked conducted
    fn on_conduct_complete(&self, _title: &str, _outcome: &ConductOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoConductProgress;

impl ConductProgressNotifier for NoConductProgress {}
