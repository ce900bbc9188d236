use jiff::Timestamp;
use tracing::{info, warn};

use intake_core::models::answer::AnswerValue;
use intake_core::models::tracking::{AbandonmentEvent, TrackingState};
use intake_core::session::SessionContext;
use intake_questionnaires::wizard::{Step, Wizard};

use crate::api::IntakeApi;
use crate::assemble::assemble;
use crate::error::ClientError;

/// What a submit attempt led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted { patient_id: String },
    /// The final segment did not pass its gate; nothing was sent.
    Blocked(Step),
}

/// A wizard run wired to the persistence and tracking endpoints.
///
/// Every segment change sends an in-progress tracking event, the ineligible
/// and completed screens send their terminal events. Tracking failures are
/// logged and never surface.
pub struct IntakeSession<A: IntakeApi> {
    wizard: Wizard,
    context: SessionContext,
    api: A,
}

impl<A: IntakeApi> IntakeSession<A> {
    /// Mount the wizard and open a fresh tracking session.
    pub fn start(wizard: Wizard, api: A) -> Self {
        let context = SessionContext::start();
        info!(
            questionnaire = wizard.questionnaire().id(),
            session_id = ?context.id(),
            "intake session started"
        );
        Self {
            wizard,
            context,
            api,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.wizard.answer(key, value);
    }

    pub fn record_upload(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.wizard.record_upload(key, url);
    }

    pub fn next(&mut self) -> Result<Step, ClientError> {
        let left = self.wizard.current_segment().id.clone();
        let step = self.wizard.next()?;
        match &step {
            Step::Moved { .. } => self.track(TrackingState::InProgress, &left),
            Step::Ineligible { .. } => self.track(TrackingState::Ineligible, &left),
            Step::Stayed | Step::Invalid { .. } => {}
        }
        Ok(step)
    }

    pub fn back(&mut self) -> Step {
        let left = self.wizard.current_segment().id.clone();
        let step = self.wizard.back();
        if let Step::Moved { .. } = step {
            self.track(TrackingState::InProgress, &left);
        }
        step
    }

    /// Post the answers once. On any failure the wizard stays on the final
    /// segment with its answers and session id, ready for another attempt.
    pub fn submit(&mut self) -> Result<SubmitOutcome, ClientError> {
        let final_segment = self.wizard.current_segment().id.clone();
        if let Some(blocked) = self.wizard.prepare_submit()? {
            if let Step::Ineligible { .. } = blocked {
                self.track(TrackingState::Ineligible, &final_segment);
            }
            return Ok(SubmitOutcome::Blocked(blocked));
        }

        let submission = assemble(&self.wizard, Timestamp::now())?;
        let envelope = self.api.save_patient(&submission).inspect_err(|e| {
            warn!(questionnaire = %submission.questionnaire, error = %e, "submission failed");
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "submission was not accepted".to_string());
            warn!(
                questionnaire = %submission.questionnaire,
                message = %message,
                "submission rejected"
            );
            return Err(ClientError::Rejected(message));
        }

        info!(
            questionnaire = %submission.questionnaire,
            patient_id = %submission.patient_id,
            "intake submitted"
        );
        self.track(TrackingState::Completed, &final_segment);
        self.context.clear();
        self.wizard.mark_submitted();

        Ok(SubmitOutcome::Submitted {
            patient_id: submission.patient_id,
        })
    }

    /// Fire-and-forget analytics. `snapshot_of` is the segment whose answers
    /// are captured, normally the one just left.
    fn track(&self, state: TrackingState, snapshot_of: &str) {
        let Some(session_id) = self.context.id() else {
            return;
        };
        let questionnaire = self.wizard.questionnaire();
        let Some(segment) = questionnaire.segment(snapshot_of) else {
            return;
        };

        let current = self.wizard.current_segment();
        let event = AbandonmentEvent {
            session_id,
            current_segment_snapshot: self.wizard.answers().snapshot(segment.keys()),
            last_segment_index: self.wizard.position(),
            state,
            question_name: current.name.clone(),
            timestamp: Timestamp::now(),
        };

        if let Err(e) = self.api.track(&event) {
            warn!(session_id = %session_id, error = %e, "abandonment tracking failed");
        }
    }
}
