//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] / [`error::NotFoundError`] - domain-level errors
//! - [`limits`] - text length and option count bounds

pub mod error;
pub mod limits;
