//! Output formatting for survey reports and overviews

pub mod console;
pub mod formatter;
