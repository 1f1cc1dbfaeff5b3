//! Progress reporting while a survey is conducted

pub mod reporter;
