use jiff::civil::Date;

use intake_core::models::answer::AnswerSet;

use crate::error::QuestionnaireError;
use crate::segment::FieldError;
use crate::Questionnaire;

/// Validate only the fields of `segment_id`.
///
/// Returns one error per failing key; an empty vector means the segment may
/// be left. Segments without fields always pass.
pub fn validate_segment(
    questionnaire: &dyn Questionnaire,
    segment_id: &str,
    answers: &AnswerSet,
    today: Date,
) -> Result<Vec<FieldError>, QuestionnaireError> {
    let segment = questionnaire.segment(segment_id).ok_or_else(|| {
        QuestionnaireError::UnknownSegment {
            questionnaire_id: questionnaire.id().to_string(),
            segment_id: segment_id.to_string(),
        }
    })?;

    Ok(segment
        .fields
        .iter()
        .filter_map(|field| field.check(answers.get(&field.key), today))
        .collect())
}
