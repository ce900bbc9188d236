use serde::{Deserialize, Serialize};

use super::patient::PatientStatus;

/// The payload posted to the persistence API when a questionnaire completes.
///
/// `answers` is flattened into the top-level object so the stored document
/// keeps the question keys the web app reads back. The assembler moves
/// `dateOfBirth` out of `answers` into the normalized field, so the two never
/// collide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub patient_id: String,
    pub questionnaire: String,
    pub from_questionnaire: bool,
    pub status: PatientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<jiff::Timestamp>,
    pub submitted_at: jiff::Timestamp,
    #[serde(flatten)]
    pub answers: serde_json::Map<String, serde_json::Value>,
}
