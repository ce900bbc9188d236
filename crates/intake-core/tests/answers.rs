use intake_core::models::answer::{AnswerSet, AnswerValue};

#[test]
fn answers_deserialize_from_form_json() {
    let json = serde_json::json!({
        "firstName": "Ana",
        "consent": true,
        "medicalConditions": ["None of the above"]
    });
    let answers: AnswerSet = serde_json::from_value(json).unwrap();
    assert_eq!(answers.text("firstName"), Some("Ana"));
    assert_eq!(answers.flag("consent"), Some(true));
    assert!(answers.selection("medicalConditions").unwrap().contains("None of the above"));
}

#[test]
fn set_overwrites_and_returns_previous() {
    let mut answers = AnswerSet::new();
    assert!(answers.set("state", "CA").is_none());
    let previous = answers.set("state", "NY");
    assert_eq!(previous, Some(AnswerValue::from("CA")));
    assert_eq!(answers.len(), 1);
}

#[test]
fn snapshot_keeps_only_answered_keys() {
    let answers: AnswerSet = [("heightFeet", "5"), ("goalWeight", "150")].into_iter().collect();
    let snap = answers.snapshot(["heightFeet", "heightInches"]);
    assert_eq!(snap, serde_json::json!({ "heightFeet": "5" }));
}

#[test]
fn text_reads_are_trimmed() {
    let mut answers = AnswerSet::new();
    answers.set("nitratesMedication", " yes ");
    assert_eq!(answers.text("nitratesMedication"), Some("yes"));
    assert_eq!(
        answers.get("nitratesMedication").and_then(AnswerValue::as_text),
        Some(" yes ")
    );
}
