//! Use cases
//!
//! Application-level operations that orchestrate domain logic. Each use case
//! that works on an existing survey selects it by display index through the
//! catalog filter it owns.

pub mod add_question;
pub mod conduct_survey;
pub mod create_survey;
pub mod publish_results;
pub mod view_survey;
pub(crate) mod shared;
