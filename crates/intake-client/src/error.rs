use thiserror::Error;

use intake_core::error::CoreError;
use intake_questionnaires::error::QuestionnaireError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("persistence API rejected the submission: {0}")]
    Rejected(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error("configuration error: {0}")]
    Config(String),
}
