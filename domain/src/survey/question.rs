//! Question entity

use crate::core::error::ValidationError;
use crate::core::limits::{
    EMPTY_OPTION_PLACEHOLDER, MAX_OPTION_CHARS, MAX_OPTIONS, MAX_QUESTION_CHARS, MIN_OPTIONS,
    is_blank,
};
use crate::tally::TallyTree;
use crate::util::clip_chars;

/// A multiple-choice question and the responses recorded for it (Entity)
///
/// Immutable once created, except through [`record_response`](Self::record_response).
#[derive(Debug, Clone)]
pub struct Question {
    text: String,
    options: Vec<String>,
    tally: TallyTree,
    total_responses: usize,
}

impl Question {
    /// Create a question from raw input.
    ///
    /// Rejects blank text and option counts outside `MIN_OPTIONS..=MAX_OPTIONS`.
    /// Blank options are replaced with [`EMPTY_OPTION_PLACEHOLDER`]; over-long
    /// text and options are clipped.
    pub fn new<S: AsRef<str>>(text: &str, options: &[S]) -> Result<Self, ValidationError> {
        Self::validate_text(text)?;
        Self::validate_option_count(options.len())?;

        let options = options
            .iter()
            .map(|option| {
                let option = option.as_ref();
                if is_blank(option) {
                    EMPTY_OPTION_PLACEHOLDER.to_string()
                } else {
                    clip_chars(option, MAX_OPTION_CHARS).to_string()
                }
            })
            .collect();

        Ok(Self {
            text: clip_chars(text, MAX_QUESTION_CHARS).to_string(),
            options,
            tally: TallyTree::new(),
            total_responses: 0,
        })
    }

    /// Check question text on its own, before any options are collected
    pub fn validate_text(text: &str) -> Result<(), ValidationError> {
        if is_blank(text) {
            Err(ValidationError::EmptyQuestion)
        } else {
            Ok(())
        }
    }

    /// Check an option count on its own, before the options are collected
    pub fn validate_option_count(count: usize) -> Result<(), ValidationError> {
        if (MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            Ok(())
        } else {
            Err(ValidationError::OptionCount(count))
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in display order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn num_options(&self) -> usize {
        self.options.len()
    }

    pub fn tally(&self) -> &TallyTree {
        &self.tally
    }

    /// Number of responses successfully recorded
    pub fn total_responses(&self) -> usize {
        self.total_responses
    }

    /// Record one response choosing the option at `option_index` (zero-based).
    ///
    /// Returns the updated count for that option's text. Out-of-range indices
    /// leave the question untouched.
    pub fn record_response(&mut self, option_index: usize) -> Result<usize, ValidationError> {
        let option = self
            .options
            .get(option_index)
            .ok_or(ValidationError::ChoiceOutOfRange {
                choice: option_index,
                available: self.options.len(),
            })?;
        let count = self.tally.record(option);
        self.total_responses += 1;
        Ok(count)
    }

    /// Responses recorded for the option at `option_index`.
    ///
    /// Looked up by text, so options sharing a text share a count.
    pub fn count_for(&self, option_index: usize) -> usize {
        self.options
            .get(option_index)
            .map(|option| self.tally.count(option))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Question {
        Question::new("Favorite?", &["Red", "Blue"]).unwrap()
    }

    #[test]
    fn test_question_creation() {
        let q = colors();
        assert_eq!(q.text(), "Favorite?");
        assert_eq!(q.options(), &["Red".to_string(), "Blue".to_string()]);
        assert_eq!(q.total_responses(), 0);
        assert!(q.tally().is_empty());
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(
            Question::new("", &["a", "b"]).unwrap_err(),
            ValidationError::EmptyQuestion
        );
        assert_eq!(
            Question::new("   ", &["a", "b"]).unwrap_err(),
            ValidationError::EmptyQuestion
        );
    }

    #[test]
    fn test_option_count_bounds() {
        assert_eq!(
            Question::new("Q", &["only"]).unwrap_err(),
            ValidationError::OptionCount(1)
        );
        assert_eq!(
            Question::new("Q", &["a", "b", "c", "d", "e", "f"]).unwrap_err(),
            ValidationError::OptionCount(6)
        );
        assert!(Question::new("Q", &["a", "b"]).is_ok());
        assert!(Question::new("Q", &["a", "b", "c", "d", "e"]).is_ok());
    }

    #[test]
    fn test_empty_option_uses_placeholder() {
        let q = Question::new("Q", &["Yes", "", "  "]).unwrap();
        assert_eq!(q.options()[0], "Yes");
        assert_eq!(q.options()[1], EMPTY_OPTION_PLACEHOLDER);
        assert_eq!(q.options()[2], EMPTY_OPTION_PLACEHOLDER);
    }

    #[test]
    fn test_long_text_is_clipped() {
        let long_option = "o".repeat(80);
        let long_text = "q".repeat(300);
        let q = Question::new(&long_text, &[long_option.as_str(), "short"]).unwrap();
        assert_eq!(q.text().chars().count(), MAX_QUESTION_CHARS);
        assert_eq!(q.options()[0].chars().count(), MAX_OPTION_CHARS);
        assert_eq!(q.options()[1], "short");
    }

    #[test]
    fn test_record_response() {
        let mut q = colors();
        assert_eq!(q.record_response(0).unwrap(), 1);
        assert_eq!(q.record_response(0).unwrap(), 2);
        assert_eq!(q.record_response(1).unwrap(), 1);
        assert_eq!(q.total_responses(), 3);
        assert_eq!(q.count_for(0), 2);
        assert_eq!(q.count_for(1), 1);
        assert_eq!(q.tally().total(), 3);
    }

    #[test]
    fn test_record_out_of_range_leaves_question_untouched() {
        let mut q = colors();
        assert_eq!(
            q.record_response(2).unwrap_err(),
            ValidationError::ChoiceOutOfRange {
                choice: 2,
                available: 2
            }
        );
        assert_eq!(q.total_responses(), 0);
        assert!(q.tally().is_empty());
    }

    #[test]
    fn test_duplicate_option_texts_share_a_count() {
        let mut q = Question::new("Q", &["Same", "Same", "Other"]).unwrap();
        q.record_response(0).unwrap();
        assert_eq!(q.count_for(0), 1);
        assert_eq!(q.count_for(1), 1);
        assert_eq!(q.tally().len(), 1);
    }
}
