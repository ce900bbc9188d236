//! Endpoint path conventions for the external persistence API.
//!
//! Pure string functions, shared by the client and by anything that needs to
//! stand in for the persistence service.

/// Collection endpoint for patient records created by the questionnaires.
pub const PATIENTS: &str = "/api/patients";

/// Best-effort analytics endpoint for abandoned or finished wizard sessions.
pub const ABANDONMENT: &str = "/api/abandonment";

/// Join a base URL and an endpoint path without doubling the slash.
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
