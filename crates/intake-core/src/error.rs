use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date '{value}': expected MM/DD/YYYY")]
    InvalidDate { value: String },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("date conversion failed: {0}")]
    Time(#[from] jiff::Error),
}
