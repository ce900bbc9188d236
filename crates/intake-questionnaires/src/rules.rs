use serde::{Deserialize, Serialize};
use ts_rs::TS;

use intake_core::models::answer::AnswerSet;

/// An ineligibility predicate, checked when leaving `segment_id`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Disqualifier {
    pub segment_id: String,
    pub rule: DisqualifyRule,
    /// Shown on the ineligible screen.
    pub message: String,
}

impl Disqualifier {
    pub fn new(segment_id: &str, rule: DisqualifyRule, message: &str) -> Self {
        Self {
            segment_id: segment_id.to_string(),
            rule,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DisqualifyRule {
    /// The answer equals a disqualifying sentinel, e.g. nitrates == "yes".
    Equals { key: String, value: String },
    /// The selection holds anything besides the safe sentinel. A selection
    /// mixing the safe sentinel with other options still disqualifies.
    AnyOtherThan { key: String, safe: String },
    /// The answer is anything but `value`, e.g. age confirmation != "yes".
    Unless { key: String, value: String },
}

impl DisqualifyRule {
    pub fn equals(key: &str, value: &str) -> Self {
        DisqualifyRule::Equals {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn any_other_than(key: &str, safe: &str) -> Self {
        DisqualifyRule::AnyOtherThan {
            key: key.to_string(),
            safe: safe.to_string(),
        }
    }

    pub fn unless(key: &str, value: &str) -> Self {
        DisqualifyRule::Unless {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DisqualifyRule::Equals { key, .. }
            | DisqualifyRule::AnyOtherThan { key, .. }
            | DisqualifyRule::Unless { key, .. } => key,
        }
    }

    pub fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            DisqualifyRule::Equals { key, value } => answers.text(key) == Some(value.as_str()),
            DisqualifyRule::AnyOtherThan { key, safe } => answers
                .selection(key)
                .is_some_and(|set| set.iter().any(|option| option != safe)),
            DisqualifyRule::Unless { key, value } => answers.text(key) != Some(value.as_str()),
        }
    }
}

/// Why a wizard ended on the ineligible screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Disqualification {
    pub segment_id: String,
    pub key: String,
    pub message: String,
}

/// Branch: leaving segment `at` with `answers[key] == equals` jumps over the
/// next `skip` segments, and stepping back from the landing segment jumps
/// over them again.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkipRule {
    pub at: String,
    pub key: String,
    pub equals: String,
    pub skip: usize,
}

impl SkipRule {
    pub fn new(at: &str, key: &str, equals: &str, skip: usize) -> Self {
        Self {
            at: at.to_string(),
            key: key.to_string(),
            equals: equals.to_string(),
            skip,
        }
    }

    pub fn holds(&self, answers: &AnswerSet) -> bool {
        answers.text(&self.key) == Some(self.equals.as_str())
    }
}
