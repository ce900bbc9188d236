use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer as the web form sends it.
///
/// Enumerated options and uploaded file URLs are carried as `Text`; the
/// field's validation rule decides how the text is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Flag(bool),
    Text(String),
    Selection(BTreeSet<String>),
}

impl AnswerValue {
    pub fn selection<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Selection(options.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&BTreeSet<String>> {
        match self {
            AnswerValue::Selection(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AnswerValue::Flag(b) => serde_json::Value::Bool(*b),
            AnswerValue::Text(s) => serde_json::Value::String(s.clone()),
            AnswerValue::Selection(set) => set
                .iter()
                .map(|s| serde_json::Value::String(s.clone()))
                .collect(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

/// The accumulated answers of one wizard run, keyed by question key.
///
/// Answers are only inserted or overwritten. Going back and changing a branch
/// answer leaves the answers of the skipped segment in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer, returning the value it replaced.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Text answer with surrounding whitespace removed, the form every rule
    /// and the validator compare against.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text).map(str::trim)
    }

    pub fn selection(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.get(key).and_then(AnswerValue::as_selection)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AnswerValue::as_flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// JSON object holding only the given keys, for tracking snapshots.
    /// Keys without an answer are omitted.
    pub fn snapshot<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = keys
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v.to_json())))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
