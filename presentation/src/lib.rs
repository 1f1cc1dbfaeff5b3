//! Presentation layer for survey-tally
//!
//! This crate contains the CLI definition, the interactive menu,
//! report formatters and the console progress reporter.

pub mod cli;
pub mod config;
pub mod menu;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg};
pub use config::OutputConfig;
pub use menu::{InputError, InteractiveResponder, LineInput, MenuError, MenuSession};
pub use output::console::ConsoleFormatter;
pub use output::formatter::ReportFormatter;
pub use progress::reporter::ConsoleProgress;
