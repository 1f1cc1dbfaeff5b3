//! Configuration validation results.
//!
//! Loaders report problems as structured [`ConfigIssue`]s instead of failing.
//! Every issue is a warning: the offending value has already been replaced
//! by its default.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field holds a value outside its accepted range.
    InvalidValue { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Issue for `field` holding `value`, explained by `message`
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: ConfigIssueCode::InvalidValue {
                field: field.into(),
                value: value.into(),
            },
            message: message.into(),
        }
    }
}
