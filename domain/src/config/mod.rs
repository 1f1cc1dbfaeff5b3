//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod report_format;
mod report_style;
pub mod validation;

pub use report_format::ReportFormat;
pub use report_style::ReportStyle;
pub use validation::{ConfigIssue, ConfigIssueCode};
