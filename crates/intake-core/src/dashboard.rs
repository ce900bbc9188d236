//! Dashboard table derivations over an in-memory patient list.
//!
//! Everything here is pure: the caller fetches the records, these functions
//! decide which rows a staff member sees, how they are filtered and sorted,
//! and what the status badges count.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::patient::{BadgeTone, PatientRecord, PatientStatus, StaffRole};

/// The staff member looking at the table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Viewer {
    pub role: StaffRole,
    pub staff_id: String,
}

/// Table filters. Every populated filter must match (AND).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PatientFilter {
    pub status: Option<PatientStatus>,
    pub questionnaire: Option<String>,
    /// Matches either the assigned clinician or the assigned technician.
    pub assignee: Option<String>,
    /// Case-insensitive substring over full name, email and patient id.
    pub search: Option<String>,
    pub unread_only: bool,
}

impl PatientFilter {
    pub fn matches(&self, record: &PatientRecord) -> bool {
        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }
        if let Some(q) = &self.questionnaire
            && &record.questionnaire != q
        {
            return false;
        }
        if let Some(assignee) = &self.assignee
            && record.assigned_clinician.as_ref() != Some(assignee)
            && record.assigned_technician.as_ref() != Some(assignee)
        {
            return false;
        }
        if self.unread_only && record.unread_messages == 0 {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let haystacks = [
                    record.full_name().to_lowercase(),
                    record.email.to_lowercase(),
                    record.patient_id.to_lowercase(),
                ];
                if !haystacks.iter().any(|h| h.contains(&needle)) {
                    return false;
                }
            }
        }
        true
    }
}

/// Rows the viewer may see: admins see everything, clinicians and
/// technicians only records assigned to them in their role.
pub fn visible_rows<'a>(records: &'a [PatientRecord], viewer: &Viewer) -> Vec<&'a PatientRecord> {
    records
        .iter()
        .filter(|r| match viewer.role {
            StaffRole::Admin => true,
            StaffRole::Clinician => r.assigned_clinician.as_deref() == Some(&viewer.staff_id),
            StaffRole::Technician => r.assigned_technician.as_deref() == Some(&viewer.staff_id),
        })
        .collect()
}

/// Filter rows and order them newest first.
pub fn apply_filter<'a>(
    rows: &[&'a PatientRecord],
    filter: &PatientFilter,
) -> Vec<&'a PatientRecord> {
    let mut out: Vec<&PatientRecord> = rows
        .iter()
        .copied()
        .filter(|r| filter.matches(r))
        .collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

/// One status badge in the table header.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusCount {
    pub status: PatientStatus,
    pub label: String,
    pub tone: BadgeTone,
    pub count: usize,
}

/// Badge counts for every status, in display order, zeros included.
pub fn status_counts(rows: &[&PatientRecord]) -> Vec<StatusCount> {
    PatientStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            label: status.label().to_string(),
            tone: status.tone(),
            count: rows.iter().filter(|r| r.status == status).count(),
        })
        .collect()
}
