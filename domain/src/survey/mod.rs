//! Survey domain
//!
//! - [`entities::Survey`] - a titled list of questions
//! - [`question::Question`] - one multiple-choice question with its tally
//! - [`conduct`] - recording one response per question
//! - [`report`] - counts and percentages per option

pub mod conduct;
pub mod entities;
pub mod question;
pub mod report;
