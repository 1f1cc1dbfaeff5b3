//! Survey entity

use super::question::Question;
use crate::core::error::ValidationError;
use crate::core::limits::{MAX_TITLE_CHARS, is_blank};
use crate::util::clip_chars;

/// A titled, ordered collection of questions (Entity)
///
/// Questions are append-only and kept in insertion order, which is also the
/// order used for display, conducting and reporting.
#[derive(Debug, Clone)]
pub struct Survey {
    title: String,
    questions: Vec<Question>,
    conducted: bool,
}

impl Survey {
    /// Create an empty, not yet conducted survey.
    ///
    /// Titles need not be unique. Over-long titles are clipped.
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        if is_blank(title) {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title: clip_chars(title, MAX_TITLE_CHARS).to_string(),
            questions: Vec::new(),
            conducted: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Questions in insertion order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Whether at least one conduct pass has run, complete or not
    pub fn is_conducted(&self) -> bool {
        self.conducted
    }

    /// Validate and append a question at the end of the survey.
    ///
    /// Returns the new question. On error the survey is unchanged.
    pub fn append_question<S: AsRef<str>>(
        &mut self,
        text: &str,
        options: &[S],
    ) -> Result<&Question, ValidationError> {
        let question = Question::new(text, options)?;
        self.questions.push(question);
        Ok(&self.questions[self.questions.len() - 1])
    }

    pub(crate) fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    pub(crate) fn mark_conducted(&mut self) {
        self.conducted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_survey() {
        let survey = Survey::new("Colors").unwrap();
        assert_eq!(survey.title(), "Colors");
        assert!(!survey.has_questions());
        assert!(!survey.is_conducted());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(Survey::new("").unwrap_err(), ValidationError::EmptyTitle);
        assert_eq!(Survey::new(" \t").unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn test_long_title_clipped() {
        let survey = Survey::new(&"t".repeat(150)).unwrap();
        assert_eq!(survey.title().chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut survey = Survey::new("S").unwrap();
        for text in ["first", "second", "third"] {
            survey.append_question(text, &["a", "b"]).unwrap();
        }
        let texts: Vec<_> = survey.questions().iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_failed_append_does_not_grow() {
        let mut survey = Survey::new("S").unwrap();
        survey.append_question("ok", &["a", "b"]).unwrap();

        assert!(survey.append_question("", &["a", "b"]).is_err());
        assert!(survey.append_question("one", &["a"]).is_err());
        assert!(
            survey
                .append_question("six", &["1", "2", "3", "4", "5", "6"])
                .is_err()
        );

        assert_eq!(survey.questions().len(), 1);
    }

    #[test]
    fn test_append_returns_new_question() {
        let mut survey = Survey::new("S").unwrap();
        let question = survey.append_question("Pick", &["x", ""]).unwrap();
        assert_eq!(question.text(), "Pick");
        assert_eq!(question.options()[1], "(empty option)");
    }
}
