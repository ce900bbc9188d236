//! Shared fixtures: a fixed "today" and answers that pass every segment.
#![allow(dead_code)]

use jiff::civil::{date, Date};

use intake_core::models::answer::AnswerValue;
use intake_questionnaires::get_questionnaire;
use intake_questionnaires::wizard::Wizard;

pub fn today() -> Date {
    date(2026, 10, 18)
}

pub fn wizard(id: &str) -> Wizard {
    Wizard::new(get_questionnaire(id).unwrap()).with_today(today())
}

/// Answers for `segment_id` that validate and do not disqualify.
pub fn passing_answers(questionnaire: &str, segment_id: &str) -> Vec<(&'static str, AnswerValue)> {
    let none = || AnswerValue::selection(["None of the above"]);
    match (questionnaire, segment_id) {
        (_, "age_verification") => vec![("ageConfirmation", "yes".into())],
        ("weight_loss", "personal_info") => vec![
            ("firstName", "Ana".into()),
            ("lastName", "Ruiz".into()),
            ("dateOfBirth", "04/12/1985".into()),
            ("email", "ana@example.com".into()),
            ("sex", "female".into()),
        ],
        (_, "personal_info") => vec![
            ("firstName", "Sam".into()),
            ("lastName", "Okafor".into()),
            ("email", "sam@example.com".into()),
            ("dateOfBirth", "11/02/1979".into()),
        ],
        (_, "state") => vec![("state", "CA".into())],
        (_, "body_metrics") => vec![
            ("heightFeet", "5".into()),
            ("heightInches", "6".into()),
            ("currentWeight", "210".into()),
            ("goalWeight", "160".into()),
        ],
        (_, "medical_conditions") => vec![("medicalConditions", none())],
        (_, "pregnancy") => vec![("pregnantOrBreastfeeding", "no".into())],
        (_, "previous_medication") => vec![("previousGlp1Medication", "yes".into())],
        (_, "previous_medication_details") => vec![
            ("previousGlp1Name", "semaglutide".into()),
            ("lastDoseDate", "01/15/2026".into()),
        ],
        (_, "current_medications") => vec![("currentMedications", "none".into())],
        (_, "photo_upload") => vec![("bodyPhotoUrl", "https://cdn.example.com/body.jpg".into())],
        (_, "symptoms") => vec![
            ("edFrequency", "often".into()),
            ("edDuration", "over_a_year".into()),
        ],
        (_, "nitrates") => vec![("nitratesMedication", "no".into())],
        (_, "cardiovascular") => vec![("heartConditions", none())],
        (_, "previous_treatment") => vec![("previousEdMedication", "yes".into())],
        (_, "previous_treatment_details") => vec![
            ("previousEdMedicationName", "sildenafil".into()),
            ("previousEdMedicationEffective", "somewhat".into()),
        ],
        (_, "medication_preference") => vec![("preferredMedication", "tadalafil".into())],
        (_, "id_upload") => vec![("idPhotoUrl", "https://cdn.example.com/id.jpg".into())],
        (_, "consent") => vec![("consent", true.into())],
        _ => vec![],
    }
}

/// Fill in the current segment with passing answers.
pub fn fill_current(wizard: &mut Wizard) {
    let questionnaire = wizard.questionnaire().id().to_string();
    let segment = wizard.current_segment().id.clone();
    for (key, value) in passing_answers(&questionnaire, &segment) {
        wizard.answer(key, value);
    }
}

/// Walk forward with passing answers until `segment_id` is current.
pub fn walk_to(wizard: &mut Wizard, segment_id: &str) {
    while wizard.current_segment().id != segment_id {
        fill_current(wizard);
        wizard.next().unwrap();
    }
}
