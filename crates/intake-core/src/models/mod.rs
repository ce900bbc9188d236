pub mod answer;
pub mod envelope;
pub mod patient;
pub mod submission;
pub mod tracking;
