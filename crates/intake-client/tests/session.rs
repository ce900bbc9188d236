use std::cell::{Cell, RefCell};

use jiff::civil::date;

use intake_client::api::IntakeApi;
use intake_client::error::ClientError;
use intake_client::session::{IntakeSession, SubmitOutcome};
use intake_core::models::answer::AnswerValue;
use intake_core::models::envelope::ApiEnvelope;
use intake_core::models::submission::IntakeSubmission;
use intake_core::models::tracking::{AbandonmentEvent, TrackingState};
use intake_questionnaires::get_questionnaire;
use intake_questionnaires::wizard::{Step, Wizard};

/// Records every call; submissions fail while `fail_submit` is set.
#[derive(Default)]
struct FakeApi {
    fail_submit: Cell<bool>,
    reject_submit: Cell<bool>,
    fail_tracking: Cell<bool>,
    submissions: RefCell<Vec<IntakeSubmission>>,
    events: RefCell<Vec<AbandonmentEvent>>,
}

impl IntakeApi for FakeApi {
    fn save_patient(&self, submission: &IntakeSubmission) -> Result<ApiEnvelope, ClientError> {
        if self.fail_submit.get() {
            return Err(ClientError::Transport {
                url: "http://fake/api/patients".to_string(),
                message: "connection reset".to_string(),
            });
        }
        if self.reject_submit.get() {
            return Ok(ApiEnvelope::failed("duplicate email"));
        }
        self.submissions.borrow_mut().push(submission.clone());
        Ok(ApiEnvelope::ok(serde_json::json!({ "patientId": submission.patient_id })))
    }

    fn track(&self, event: &AbandonmentEvent) -> Result<(), ClientError> {
        self.events.borrow_mut().push(event.clone());
        if self.fail_tracking.get() {
            return Err(ClientError::Status {
                url: "http://fake/api/abandonment".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

fn ed_session(api: &FakeApi) -> IntakeSession<&FakeApi> {
    let wizard = Wizard::new(get_questionnaire("erectile_dysfunction").unwrap())
        .with_today(date(2026, 10, 18));
    IntakeSession::start(wizard, api)
}

/// Answer every segment with eligible answers, skipping previous-treatment
/// details, and stop on consent.
fn complete_ed(session: &mut IntakeSession<&FakeApi>) {
    let none = || AnswerValue::selection(["None of the above"]);
    let pages: Vec<Vec<(&str, AnswerValue)>> = vec![
        vec![("ageConfirmation", "yes".into())],
        vec![
            ("firstName", "Sam".into()),
            ("lastName", "Okafor".into()),
            ("email", "sam@example.com".into()),
            ("dateOfBirth", "11/02/1979".into()),
        ],
        vec![("state", "TX".into())],
        vec![("edFrequency", "often".into()), ("edDuration", "over_a_year".into())],
        vec![],
        vec![("nitratesMedication", "no".into())],
        vec![("heartConditions", none())],
        vec![("previousEdMedication", "no".into())],
        vec![("preferredMedication", "sildenafil".into())],
    ];
    for page in pages {
        for (key, value) in page {
            session.answer(key, value);
        }
        assert!(matches!(session.next().unwrap(), Step::Moved { .. }));
    }
    session.record_upload("idPhotoUrl", "https://cdn.example.com/id.jpg");
    assert!(matches!(session.next().unwrap(), Step::Moved { .. }));
    assert!(session.wizard().is_last());
    session.answer("consent", true);
}

#[test]
fn successful_submission_clears_session_and_posts_payload() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    complete_ed(&mut session);
    assert!(session.context().is_active());

    let SubmitOutcome::Submitted { patient_id } = session.submit().unwrap() else {
        panic!("expected submission");
    };
    assert!(!session.context().is_active());

    let submissions = api.submissions.borrow();
    let payload = serde_json::to_value(&submissions[0]).unwrap();
    assert_eq!(payload["patientId"], patient_id.as_str());
    assert_eq!(payload["fromQuestionnaire"], true);
    assert_eq!(payload["questionnaire"], "erectile_dysfunction");
    assert_eq!(payload["status"], "pending");
    assert_eq!(payload["dateOfBirth"], "1979-11-02T00:00:00Z");
    assert_eq!(payload["idPhotoUrl"], "https://cdn.example.com/id.jpg");
    assert_eq!(payload["heartConditions"], serde_json::json!(["None of the above"]));

    let last = api.events.borrow().last().cloned().unwrap();
    assert_eq!(last.state, TrackingState::Completed);
}

#[test]
fn failed_submission_keeps_answers_and_session() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    complete_ed(&mut session);
    let session_id = session.context().id();
    let answers_before = session.wizard().answers().clone();

    api.fail_submit.set(true);
    assert!(matches!(session.submit(), Err(ClientError::Transport { .. })));
    assert_eq!(session.context().id(), session_id);
    assert_eq!(session.wizard().answers(), &answers_before);
    assert!(session.wizard().is_last());

    api.fail_submit.set(false);
    api.reject_submit.set(true);
    assert!(matches!(session.submit(), Err(ClientError::Rejected(_))));
    assert_eq!(session.context().id(), session_id);

    // Pressing submit again once the API recovers goes through.
    api.reject_submit.set(false);
    assert!(matches!(session.submit().unwrap(), SubmitOutcome::Submitted { .. }));
    assert_eq!(api.submissions.borrow().len(), 1);
}

#[test]
fn every_segment_change_is_tracked_under_one_session() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    session.answer("ageConfirmation", "yes");
    session.next().unwrap();
    session.back();

    let events = api.events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| Some(e.session_id) == session.context().id()));
    assert!(events.iter().all(|e| e.state == TrackingState::InProgress));
    assert_eq!(events[0].last_segment_index, 1);
    assert_eq!(events[0].question_name, "Personal Information");
    assert_eq!(events[0].current_segment_snapshot, serde_json::json!({ "ageConfirmation": "yes" }));
    assert_eq!(events[1].last_segment_index, 0);
}

#[test]
fn ineligible_is_tracked_as_terminal_state() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    session.answer("ageConfirmation", "no");
    assert!(matches!(session.next().unwrap(), Step::Ineligible { .. }));

    let events = api.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].state, TrackingState::Ineligible);
    assert_eq!(serde_json::to_value(&events[0]).unwrap()["state"], 1);
}

#[test]
fn tracking_failures_never_block_progress() {
    let api = FakeApi::default();
    api.fail_tracking.set(true);
    let mut session = ed_session(&api);
    session.answer("ageConfirmation", "yes");
    assert_eq!(session.next().unwrap(), Step::Moved { from: 0, to: 1 });
}

#[test]
fn invalid_steps_send_nothing() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    assert!(matches!(session.next().unwrap(), Step::Invalid { .. }));
    assert!(api.events.borrow().is_empty());
}

#[test]
fn submit_before_final_segment_is_an_error() {
    let api = FakeApi::default();
    let mut session = ed_session(&api);
    assert!(matches!(session.submit(), Err(ClientError::Questionnaire(_))));
    assert!(api.submissions.borrow().is_empty());
}
