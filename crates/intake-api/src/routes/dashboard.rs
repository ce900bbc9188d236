use axum::Json;
use serde::{Deserialize, Serialize};

use intake_core::dashboard::{
    PatientFilter, StatusCount, Viewer, apply_filter, status_counts, visible_rows,
};
use intake_core::models::patient::PatientRecord;

#[derive(Deserialize)]
pub struct DashboardRequest {
    pub patients: Vec<PatientRecord>,
    #[serde(default)]
    pub filter: PatientFilter,
    pub viewer: Viewer,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub patients: Vec<PatientRecord>,
    /// Badge counts over every row the viewer may see, before filtering.
    pub counts: Vec<StatusCount>,
}

/// Derive the dashboard table for one staff member.
pub async fn filter_patients(Json(req): Json<DashboardRequest>) -> Json<DashboardResponse> {
    let visible = visible_rows(&req.patients, &req.viewer);
    let counts = status_counts(&visible);
    let patients = apply_filter(&visible, &req.filter)
        .into_iter()
        .cloned()
        .collect();

    Json(DashboardResponse { patients, counts })
}
