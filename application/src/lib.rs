//! Application layer for survey-tally
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{ConductProgressNotifier, NoConductProgress},
    response_provider::{Answer, ResponseProvider, ResponseProviderError, ScriptedResponses},
};
pub use use_cases::add_question::{
    AddQuestionError, AddQuestionOutput, AddQuestionUseCase, QuestionDraft,
};
pub use use_cases::conduct_survey::{
    ConductSurveyError, ConductSurveyOutput, ConductSurveyUseCase,
};
pub use use_cases::create_survey::{CreateSurveyError, CreateSurveyOutput, CreateSurveyUseCase};
pub use use_cases::publish_results::{PublishError, PublishResultsUseCase};
pub use use_cases::view_survey::{
    QuestionOverview, SurveyOverview, ViewSurveyError, ViewSurveyUseCase,
};
