//! Field rules for a [`CardDraft`].
//!
//! The same rule function serves per-field validation when an input loses
//! focus and the exhaustive pass run before a submission. Rules are
//! independent: there are no cross-field checks, so a start date later than
//! the due date is accepted.

use crate::draft::{CardDraft, DraftField};
use chrono::{DateTime, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("is required")]
    MissingField,
    #[error("must be a valid date")]
    InvalidDate,
}

impl FieldError {
    /// Inline message, e.g. "Due Date is required".
    pub fn message(self, field: DraftField) -> String {
        format!("{} {}", field.label(), self)
    }
}

/// Every failing field with its error. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<DraftField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: DraftField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: DraftField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    pub fn messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, error)| error.message(field))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Accepts calendar dates (`2024-03-01`) and RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

pub fn validate_field(draft: &CardDraft, field: DraftField) -> Result<(), FieldError> {
    let value = draft.get(field);
    if value.trim().is_empty() {
        return Err(FieldError::MissingField);
    }
    if field.is_date() && parse_date(value).is_none() {
        return Err(FieldError::InvalidDate);
    }
    Ok(())
}

pub fn validate(draft: &CardDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in DraftField::ALL {
        if let Err(error) = validate_field(draft, field) {
            errors.insert(field, error);
        }
    }
    errors
}
