//! intake-core
//!
//! Pure domain types shared by the questionnaire engine, the HTTP client and
//! the API service. No network or framework dependency: this is the shared
//! vocabulary of the intake system.

pub mod api_paths;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod models;
pub mod session;
