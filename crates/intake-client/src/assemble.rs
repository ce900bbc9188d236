use jiff::Timestamp;
use rand::Rng;

use intake_core::dates::{parse_display_date, to_timestamp};
use intake_core::models::patient::PatientStatus;
use intake_core::models::submission::IntakeSubmission;
use intake_questionnaires::questionnaires::common::DATE_OF_BIRTH;
use intake_questionnaires::wizard::Wizard;

use crate::error::ClientError;

/// Keys owned by the submission itself. Answers using them are dropped so the
/// flattened document has no duplicate keys.
const RESERVED_KEYS: &[&str] = &[
    "patientId",
    "questionnaire",
    "fromQuestionnaire",
    "status",
    DATE_OF_BIRTH,
    "submittedAt",
];

/// Build the persistence payload from a finished wizard.
pub fn assemble(wizard: &Wizard, now: Timestamp) -> Result<IntakeSubmission, ClientError> {
    let answers = wizard.answers();

    let date_of_birth = answers
        .text(DATE_OF_BIRTH)
        .map(|raw| parse_display_date(raw).and_then(to_timestamp))
        .transpose()?;

    let fields = answers
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();

    Ok(IntakeSubmission {
        patient_id: generate_patient_id(),
        questionnaire: wizard.questionnaire().id().to_string(),
        from_questionnaire: true,
        status: PatientStatus::Pending,
        date_of_birth,
        submitted_at: now,
        answers: fields,
    })
}

/// `PT-` followed by eight random digits.
pub fn generate_patient_id() -> String {
    let n: u32 = rand::rng().random_range(0..100_000_000);
    format!("PT-{n:08}")
}
