use intake_core::models::answer::AnswerSet;

use crate::rules::Disqualification;
use crate::Questionnaire;

/// Evaluate the disqualifier registered for `segment_id`, if any.
///
/// Callers must only evaluate a segment whose fields already validated.
pub fn evaluate(
    questionnaire: &dyn Questionnaire,
    segment_id: &str,
    answers: &AnswerSet,
) -> Option<Disqualification> {
    let disqualifier = questionnaire.disqualifier_for(segment_id)?;
    disqualifier.rule.holds(answers).then(|| Disqualification {
        segment_id: segment_id.to_string(),
        key: disqualifier.rule.key().to_string(),
        message: disqualifier.message.clone(),
    })
}
