//! Infrastructure layer for survey-tally
//!
//! This crate contains adapters for the outside world. Surveys live in
//! memory only, so the one adapter is configuration file loading.

pub mod config;

// Re-export commonly used types
pub use config::{ConfigLoadError, ConfigLoader, FileConfig, FileOutputConfig, FileReportConfig};
