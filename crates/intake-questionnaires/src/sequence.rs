//! Position arithmetic over a questionnaire's segment list.

use intake_core::models::answer::AnswerSet;

use crate::Questionnaire;

/// Position after moving forward from `position`.
///
/// The step is one segment, or `1 + skip` when a skip rule registered at the
/// current segment holds. Never moves past the last segment; at the last
/// segment this returns `position` unchanged.
pub fn advance(questionnaire: &dyn Questionnaire, position: usize, answers: &AnswerSet) -> usize {
    let segments = questionnaire.segments();
    let last = segments.len().saturating_sub(1);
    if position >= last {
        return position.min(last);
    }

    let current = &segments[position].id;
    let step = questionnaire
        .skip_rules()
        .iter()
        .find(|rule| &rule.at == current && rule.holds(answers))
        .map_or(1, |rule| rule.skip + 1);

    (position + step).min(last)
}

/// Position after moving back from `position`.
///
/// Mirrors [`advance`]: if this segment is where a holding skip rule lands,
/// the skipped segments are jumped over again. Clamped at zero.
pub fn retreat(questionnaire: &dyn Questionnaire, position: usize, answers: &AnswerSet) -> usize {
    if position == 0 {
        return 0;
    }

    let step = questionnaire
        .skip_rules()
        .iter()
        .find_map(|rule| {
            let at = questionnaire.segment_index(&rule.at)?;
            (at + rule.skip + 1 == position && rule.holds(answers)).then_some(rule.skip + 1)
        })
        .unwrap_or(1);

    position.saturating_sub(step)
}

/// Completion percentage shown by the progress bar. The last segment is 100.
pub fn progress(position: usize, len: usize) -> u8 {
    if len == 0 {
        return 0;
    }
    let done = (position + 1).min(len);
    ((done * 100) / len) as u8
}
