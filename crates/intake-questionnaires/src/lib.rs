//! intake-questionnaires
//!
//! Patient intake questionnaire definitions and the wizard logic that walks
//! them. Pure data and pure transitions: no network or UI dependency.

pub mod disqualify;
pub mod error;
pub mod questionnaires;
pub mod rules;
pub mod segment;
pub mod sequence;
pub mod validate;
pub mod wizard;

use rules::{Disqualifier, SkipRule};
use segment::Segment;

/// Trait implemented by each intake questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier (e.g., "weight_loss").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "GLP-1 Weight Management").
    fn name(&self) -> &str;

    /// Segments in the order the wizard presents them.
    fn segments(&self) -> &[Segment];

    /// At most one disqualifier per segment.
    fn disqualifiers(&self) -> &[Disqualifier] {
        &[]
    }

    fn skip_rules(&self) -> &[SkipRule] {
        &[]
    }

    fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments().iter().find(|s| s.id == id)
    }

    fn segment_index(&self, id: &str) -> Option<usize> {
        self.segments().iter().position(|s| s.id == id)
    }

    fn disqualifier_for(&self, segment_id: &str) -> Option<&Disqualifier> {
        self.disqualifiers()
            .iter()
            .find(|d| d.segment_id == segment_id)
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::weight_loss::WeightLoss),
        Box::new(questionnaires::erectile_dysfunction::ErectileDysfunction),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
