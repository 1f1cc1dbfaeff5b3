//! Domain layer for survey-tally
//!
//! This crate contains the core entities and the counting logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ```text
//! Catalog ──owns──▶ Survey ──owns──▶ Question ──owns──▶ TallyTree
//! ```
//!
//! - **Catalog**: every survey, most recently created first
//! - **Survey**: an ordered list of questions plus a "conducted" flag
//! - **Question**: question text, 2-5 options and the responses recorded so far
//! - **TallyTree**: a binary search tree keyed on option text counting responses
//!
//! Data only flows downward; nothing reaches back up the chain.

pub mod catalog;
pub mod config;
pub mod core;
pub mod survey;
pub mod tally;
pub mod util;

// Re-export commonly used types
pub use catalog::{Catalog, DisplayEntry, SurveyFilter};
pub use config::{ConfigIssue, ConfigIssueCode, ReportFormat, ReportStyle};
pub use core::{
    error::{NotFoundError, ValidationError},
    limits,
};
pub use survey::{
    conduct::ConductOutcome,
    entities::Survey,
    question::Question,
    report::{OptionResult, QuestionOutcome, QuestionReport, SurveyReport},
};
pub use tally::TallyTree;
