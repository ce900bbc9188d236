use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A patient record as the dashboard table sees it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientRecord {
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub questionnaire: String,
    pub status: PatientStatus,
    #[serde(default)]
    pub assigned_clinician: Option<String>,
    #[serde(default)]
    pub assigned_technician: Option<String>,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub unread_messages: u32,
}

impl PatientRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Triage status of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientStatus {
    Pending,
    InReview,
    Approved,
    Prescribed,
    Shipped,
    Rejected,
}

/// Color family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Danger,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 6] = [
        PatientStatus::Pending,
        PatientStatus::InReview,
        PatientStatus::Approved,
        PatientStatus::Prescribed,
        PatientStatus::Shipped,
        PatientStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Pending => "Pending",
            PatientStatus::InReview => "In Review",
            PatientStatus::Approved => "Approved",
            PatientStatus::Prescribed => "Prescribed",
            PatientStatus::Shipped => "Shipped",
            PatientStatus::Rejected => "Rejected",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            PatientStatus::Pending => BadgeTone::Neutral,
            PatientStatus::InReview => BadgeTone::Info,
            PatientStatus::Approved | PatientStatus::Prescribed | PatientStatus::Shipped => {
                BadgeTone::Success
            }
            PatientStatus::Rejected => BadgeTone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StaffRole {
    Admin,
    Clinician,
    Technician,
}
