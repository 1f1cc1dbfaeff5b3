//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation adapters implement.

pub mod progress;
pub mod response_provider;
