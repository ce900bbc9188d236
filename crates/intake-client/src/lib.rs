//! intake-client
//!
//! The questionnaire's side of the external persistence API: the submission
//! assembler, best-effort abandonment tracking, and a blocking HTTP transport.

pub mod api;
pub mod assemble;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
