//! Survey catalog
//!
//! The [`Catalog`] owns every survey. New surveys go to the front, so the
//! most recently created survey is always listed first. That order is what
//! users see when picking a survey by number, so it must not change.
//!
//! Selection works on a *filtered* listing: the surveys matching a
//! [`SurveyFilter`] are numbered 1, 2, 3, ... in catalog order, regardless
//! of where they sit in the unfiltered catalog.

use crate::core::error::{NotFoundError, ValidationError};
use crate::survey::entities::Survey;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which surveys a listing includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyFilter {
    /// Every survey
    Any,
    /// Surveys with at least one question
    HasQuestions,
    /// Surveys that have been conducted at least once
    Conducted,
}

impl SurveyFilter {
    pub fn matches(&self, survey: &Survey) -> bool {
        match self {
            SurveyFilter::Any => true,
            SurveyFilter::HasQuestions => survey.has_questions(),
            SurveyFilter::Conducted => survey.is_conducted(),
        }
    }

    /// Message shown when the catalog has surveys but none match
    pub fn empty_message(&self) -> &'static str {
        match self {
            SurveyFilter::Any => "No surveys available",
            SurveyFilter::HasQuestions => "No surveys with questions",
            SurveyFilter::Conducted => "No surveys have been conducted yet",
        }
    }
}

/// A survey together with its 1-based number in a filtered listing
#[derive(Debug, Clone, Copy)]
pub struct DisplayEntry<'a> {
    pub index: usize,
    pub survey: &'a Survey,
}

/// Owner of all surveys, most recent first (Aggregate)
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    surveys: VecDeque<Survey>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty survey and insert it at the front of the catalog
    pub fn create_survey(&mut self, title: &str) -> Result<&mut Survey, ValidationError> {
        let survey = Survey::new(title)?;
        self.surveys.push_front(survey);
        Ok(&mut self.surveys[0])
    }

    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }

    /// All surveys in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Survey> {
        self.surveys.iter()
    }

    /// Number the surveys matching `filter`, in catalog order
    pub fn list_filtered(&self, filter: SurveyFilter) -> Vec<DisplayEntry<'_>> {
        self.list_matching(|survey| filter.matches(survey))
    }

    /// Number the surveys matching an arbitrary predicate, in catalog order
    pub fn list_matching<P>(&self, predicate: P) -> Vec<DisplayEntry<'_>>
    where
        P: Fn(&Survey) -> bool,
    {
        self.surveys
            .iter()
            .filter(|survey| predicate(*survey))
            .enumerate()
            .map(|(position, survey)| DisplayEntry {
                index: position + 1,
                survey,
            })
            .collect()
    }

    /// Survey shown as number `index` in the listing for `filter`
    pub fn select_by_display_index(
        &self,
        filter: SurveyFilter,
        index: usize,
    ) -> Result<&Survey, NotFoundError> {
        let position = self.resolve(filter, index)?;
        Ok(&self.surveys[position])
    }

    /// Mutable variant of [`select_by_display_index`](Self::select_by_display_index)
    pub fn select_by_display_index_mut(
        &mut self,
        filter: SurveyFilter,
        index: usize,
    ) -> Result<&mut Survey, NotFoundError> {
        let position = self.resolve(filter, index)?;
        Ok(&mut self.surveys[position])
    }

    /// Map a display index to a position in the underlying sequence
    fn resolve(&self, filter: SurveyFilter, index: usize) -> Result<usize, NotFoundError> {
        if self.surveys.is_empty() {
            return Err(NotFoundError::NoSurveys);
        }

        let matching: Vec<usize> = self
            .surveys
            .iter()
            .enumerate()
            .filter(|(_, survey)| filter.matches(survey))
            .map(|(position, _)| position)
            .collect();

        if matching.is_empty() {
            return Err(NotFoundError::NoMatches(filter));
        }

        index
            .checked_sub(1)
            .and_then(|offset| matching.get(offset).copied())
            .ok_or(NotFoundError::OutOfRange {
                index,
                available: matching.len(),
            })
    }
}
