//! Create Survey use case.

use tally_domain::{Catalog, ValidationError};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while creating a survey.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateSurveyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Output of the [`CreateSurveyUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSurveyOutput {
    /// Title as stored (clipped if it was too long)
    pub title: String,
    /// Surveys in the catalog after creation
    pub total_surveys: usize,
}

/// Use case for adding a new, empty survey to the front of the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSurveyUseCase;

impl CreateSurveyUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        catalog: &mut Catalog,
        title: &str,
    ) -> Result<CreateSurveyOutput, CreateSurveyError> {
        let title = match catalog.create_survey(title) {
            Ok(survey) => survey.title().to_string(),
            Err(e) => {
                warn!("Survey not created: {}", e);
                return Err(e.into());
            }
        };

        info!("Created survey \"{}\"", title);
        Ok(CreateSurveyOutput {
            title,
            total_surveys: catalog.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_domain::SurveyFilter;

    #[test]
    fn test_create_survey() {
        let mut catalog = Catalog::new();
        let output = CreateSurveyUseCase::new()
            .execute(&mut catalog, "Colors")
            .unwrap();
        assert_eq!(output.title, "Colors");
        assert_eq!(output.total_surveys, 1);
    }

    #[test]
    fn test_newest_first() {
        let mut catalog = Catalog::new();
        let use_case = CreateSurveyUseCase::new();
        use_case.execute(&mut catalog, "A").unwrap();
        use_case.execute(&mut catalog, "B").unwrap();

        let first = catalog.select_by_display_index(SurveyFilter::Any, 1).unwrap();
        assert_eq!(first.title(), "B");
    }

    #[test]
    fn test_empty_title() {
        let mut catalog = Catalog::new();
        let err = CreateSurveyUseCase::new()
            .execute(&mut catalog, "")
            .unwrap_err();
        assert_eq!(err, CreateSurveyError::Validation(ValidationError::EmptyTitle));
        assert!(catalog.is_empty());
    }
}
