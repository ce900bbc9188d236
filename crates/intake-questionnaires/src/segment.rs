use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use intake_core::dates::{age_on, parse_display_date};
use intake_core::models::answer::AnswerValue;

/// One page of a questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Segment {
    pub id: String,
    pub name: String,
    /// Fields that must validate before the user may leave this segment.
    /// Informational segments have none.
    pub fields: Vec<Field>,
}

impl Segment {
    pub fn new(id: &str, name: &str, fields: Vec<Field>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

/// A question key together with the rules its answer must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub key: String,
    pub label: String,
    /// Checked in order; the first failing rule produces the field's error.
    pub rules: Vec<FieldRule>,
}

impl Field {
    pub fn new(key: &str, label: &str, rules: Vec<FieldRule>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            rules,
        }
    }

    pub fn required(key: &str, label: &str) -> Self {
        Self::new(key, label, vec![FieldRule::Required])
    }

    pub fn one_of(key: &str, label: &str, options: &[&str]) -> Self {
        Self::new(key, label, vec![FieldRule::one_of(options)])
    }

    /// Check an answer against every rule, returning the first failure.
    pub fn check(&self, value: Option<&AnswerValue>, today: Date) -> Option<FieldError> {
        self.rules.iter().find_map(|rule| {
            rule.check(value, today).err().map(|message| FieldError {
                key: self.key.clone(),
                message,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldRule {
    /// Non-blank text.
    Required,
    /// Text equal to one of the listed options.
    OneOf(Vec<String>),
    /// Multi-select with at least one option picked.
    NonEmptySelection,
    /// A real calendar date written as `MM/DD/YYYY`.
    Date,
    /// A `MM/DD/YYYY` birth date at least this many whole years before today.
    MinimumAge(u8),
    /// A checkbox that must be ticked.
    Accepted,
    /// An `http(s)` URL returned by the upload widget.
    Upload,
}

impl FieldRule {
    pub fn one_of(options: &[&str]) -> Self {
        FieldRule::OneOf(options.iter().map(|s| s.to_string()).collect())
    }

    /// Returns the user-facing message on failure.
    pub fn check(&self, value: Option<&AnswerValue>, today: Date) -> Result<(), String> {
        let text = value.and_then(AnswerValue::as_text).map(str::trim);
        match self {
            FieldRule::Required => match text {
                Some(t) if !t.is_empty() => Ok(()),
                _ => Err("This field is required".to_string()),
            },
            FieldRule::OneOf(options) => match text {
                Some(t) if options.iter().any(|o| o == t) => Ok(()),
                Some(t) if !t.is_empty() => Err(format!("'{t}' is not a valid option")),
                _ => Err("Please select an option".to_string()),
            },
            FieldRule::NonEmptySelection => match value.and_then(AnswerValue::as_selection) {
                Some(set) if !set.is_empty() => Ok(()),
                _ => Err("Please select at least one option".to_string()),
            },
            FieldRule::Date => text
                .and_then(|t| parse_display_date(t).ok())
                .map(|_| ())
                .ok_or_else(|| "Enter a valid date (MM/DD/YYYY)".to_string()),
            FieldRule::MinimumAge(years) => {
                let birth = text
                    .and_then(|t| parse_display_date(t).ok())
                    .ok_or_else(|| "Enter a valid date (MM/DD/YYYY)".to_string())?;
                if age_on(birth, today) >= i16::from(*years) {
                    Ok(())
                } else {
                    Err(format!("You must be at least {years} years old"))
                }
            }
            FieldRule::Accepted => match value.and_then(AnswerValue::as_flag) {
                Some(true) => Ok(()),
                _ => Err("You must agree to continue".to_string()),
            },
            FieldRule::Upload => match text {
                Some(t) if t.starts_with("https://") || t.starts_with("http://") => Ok(()),
                _ => Err("Please upload a file".to_string()),
            },
        }
    }
}

/// A validation failure attached to one question key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{key}: {message}")]
pub struct FieldError {
    pub key: String,
    pub message: String,
}
