use thiserror::Error;

use crate::segment::FieldError;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("unknown segment '{segment_id}' for questionnaire '{questionnaire_id}'")]
    UnknownSegment {
        questionnaire_id: String,
        segment_id: String,
    },

    #[error("position {position} is out of range for questionnaire '{questionnaire_id}'")]
    PositionOutOfRange {
        questionnaire_id: String,
        position: usize,
    },

    #[error("the wizard is not on its final segment")]
    NotAtFinalSegment,

    #[error("the wizard has already ended")]
    Closed,

    #[error("{} field(s) failed validation", .0.len())]
    Incomplete(Vec<FieldError>),
}
