use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a wizard session stood when the tracking event was sent.
/// Serialized as the bare number the analytics endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TrackingState {
    InProgress,
    Ineligible,
    Completed,
}

impl From<TrackingState> for u8 {
    fn from(state: TrackingState) -> Self {
        match state {
            TrackingState::InProgress => 0,
            TrackingState::Ineligible => 1,
            TrackingState::Completed => 2,
        }
    }
}

impl TryFrom<u8> for TrackingState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TrackingState::InProgress),
            1 => Ok(TrackingState::Ineligible),
            2 => Ok(TrackingState::Completed),
            other => Err(format!("unknown tracking state: {other}")),
        }
    }
}

/// A best-effort abandonment analytics event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbandonmentEvent {
    pub session_id: Uuid,
    /// Answers of the segment the user was on, keyed by question key.
    pub current_segment_snapshot: serde_json::Value,
    pub last_segment_index: usize,
    pub state: TrackingState,
    /// Display name of the segment the user was on.
    pub question_name: String,
    pub timestamp: jiff::Timestamp,
}
