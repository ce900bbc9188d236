use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use intake_core::dates;
use intake_core::models::answer::{AnswerSet, AnswerValue};

use crate::disqualify::evaluate;
use crate::error::QuestionnaireError;
use crate::rules::Disqualification;
use crate::segment::{FieldError, Segment};
use crate::sequence::{advance, progress, retreat};
use crate::validate::validate_segment;
use crate::Questionnaire;

/// Where a wizard run stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    /// Terminal: an answer made the patient ineligible.
    Ineligible(Disqualification),
    /// Terminal: the answers were accepted by the persistence API.
    Submitted,
}

/// The result of asking the wizard to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    Moved { from: usize, to: usize },
    /// Nothing happened: first or last segment, or the wizard has ended.
    Stayed,
    Invalid { errors: Vec<FieldError> },
    Ineligible { disqualification: Disqualification },
}

/// One run through a questionnaire: position, answers and phase.
pub struct Wizard {
    questionnaire: Box<dyn Questionnaire>,
    position: usize,
    answers: AnswerSet,
    phase: Phase,
    today: Option<Date>,
}

impl Wizard {
    pub fn new(questionnaire: Box<dyn Questionnaire>) -> Self {
        Self {
            questionnaire,
            position: 0,
            answers: AnswerSet::new(),
            phase: Phase::InProgress,
            today: None,
        }
    }

    /// Resume a run at `position` with answers collected elsewhere.
    pub fn resume(
        questionnaire: Box<dyn Questionnaire>,
        position: usize,
        answers: AnswerSet,
    ) -> Result<Self, QuestionnaireError> {
        if position >= questionnaire.segments().len() {
            return Err(QuestionnaireError::PositionOutOfRange {
                questionnaire_id: questionnaire.id().to_string(),
                position,
            });
        }
        Ok(Self {
            questionnaire,
            position,
            answers,
            phase: Phase::InProgress,
            today: None,
        })
    }

    /// Pin the date age checks are computed against.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    pub fn questionnaire(&self) -> &dyn Questionnaire {
        self.questionnaire.as_ref()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current_segment(&self) -> &Segment {
        &self.questionnaire.segments()[self.position]
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questionnaire.segments().len()
    }

    pub fn progress(&self) -> u8 {
        progress(self.position, self.questionnaire.segments().len())
    }

    fn today(&self) -> Date {
        self.today.unwrap_or_else(dates::today)
    }

    /// Store an answer. Ignored once the wizard has ended.
    pub fn answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        if self.phase != Phase::InProgress {
            debug!(questionnaire = self.questionnaire.id(), "answer ignored, wizard ended");
            return;
        }
        self.answers.set(key, value);
    }

    /// Store the hosted URL the upload widget returned for `key`.
    pub fn record_upload(&mut self, key: impl Into<String>, url: impl Into<String>) {
        let key = key.into();
        debug!(questionnaire = self.questionnaire.id(), key = %key, "upload recorded");
        self.answer(key, AnswerValue::Text(url.into()));
    }

    /// Validate, then check eligibility for the current segment.
    /// `None` means the segment may be left.
    fn gate(&mut self) -> Result<Option<Step>, QuestionnaireError> {
        let segment_id = self.current_segment().id.clone();
        let errors = validate_segment(
            self.questionnaire.as_ref(),
            &segment_id,
            &self.answers,
            self.today(),
        )?;
        if !errors.is_empty() {
            debug!(
                questionnaire = self.questionnaire.id(),
                segment = %segment_id,
                failing = errors.len(),
                "segment invalid"
            );
            return Ok(Some(Step::Invalid { errors }));
        }

        if let Some(disqualification) =
            evaluate(self.questionnaire.as_ref(), &segment_id, &self.answers)
        {
            info!(
                questionnaire = self.questionnaire.id(),
                segment = %segment_id,
                key = %disqualification.key,
                "patient ineligible"
            );
            self.phase = Phase::Ineligible(disqualification.clone());
            return Ok(Some(Step::Ineligible { disqualification }));
        }

        Ok(None)
    }

    /// Leave the current segment forward: validation, then disqualification,
    /// then the move. On the last segment a passing gate leaves the position
    /// unchanged and returns [`Step::Stayed`].
    pub fn next(&mut self) -> Result<Step, QuestionnaireError> {
        if self.phase != Phase::InProgress {
            return Ok(Step::Stayed);
        }
        if let Some(blocked) = self.gate()? {
            return Ok(blocked);
        }

        let from = self.position;
        let to = advance(self.questionnaire.as_ref(), from, &self.answers);
        if to == from {
            return Ok(Step::Stayed);
        }
        self.position = to;
        debug!(questionnaire = self.questionnaire.id(), from, to, "advanced");
        Ok(Step::Moved { from, to })
    }

    /// Step back without validating.
    pub fn back(&mut self) -> Step {
        if self.phase != Phase::InProgress {
            return Step::Stayed;
        }
        let from = self.position;
        let to = retreat(self.questionnaire.as_ref(), from, &self.answers);
        if to == from {
            return Step::Stayed;
        }
        self.position = to;
        debug!(questionnaire = self.questionnaire.id(), from, to, "retreated");
        Step::Moved { from, to }
    }

    /// Check that the run may be submitted now.
    ///
    /// `Ok(None)` means ready. `Ok(Some(step))` means the final segment is
    /// blocked by invalid fields or a disqualification.
    pub fn prepare_submit(&mut self) -> Result<Option<Step>, QuestionnaireError> {
        if self.phase != Phase::InProgress {
            return Err(QuestionnaireError::Closed);
        }
        if !self.is_last() {
            return Err(QuestionnaireError::NotAtFinalSegment);
        }
        self.gate()
    }

    pub fn mark_submitted(&mut self) {
        info!(questionnaire = self.questionnaire.id(), "questionnaire submitted");
        self.phase = Phase::Submitted;
    }
}
