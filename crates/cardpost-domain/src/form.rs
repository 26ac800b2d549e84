//! Submission lifecycle of the card form.
//!
//! `CardForm` owns the draft and the `is_submitting` flag. A submission is
//! driven in two synchronous steps around one pending request:
//! [`CardForm::begin_submit`] validates and enters the submitting phase, and
//! [`CardForm::settle`] consumes the request outcome and returns to idle.

use crate::draft::{CardDraft, DraftField};
use crate::notification::Notification;
use crate::request::{CreateCardRequest, CreatedCard};
use crate::validation::{validate, validate_field, ValidationErrors};
use cardpost_core::CardPostResult;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
}

/// Why `begin_submit` did not produce a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0}")]
    Invalid(ValidationErrors),
}

#[derive(Debug, Clone, Default)]
pub struct CardForm {
    draft: CardDraft,
    errors: ValidationErrors,
    touched: BTreeSet<DraftField>,
    is_submitting: bool,
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: CardDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn field(&self, field: DraftField) -> &str {
        self.draft.get(field)
    }

    /// Edits are accepted in every phase; the in-flight request carries
    /// its own snapshot.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Marks `field` touched and re-runs its rule.
    pub fn blur(&mut self, field: DraftField) {
        self.touched.insert(field);
        match validate_field(&self.draft, field) {
            Ok(()) => self.errors.remove(field),
            Err(error) => self.errors.insert(field, error),
        }
    }

    pub fn is_touched(&self, field: DraftField) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for `field`, shown only once the field was touched.
    pub fn visible_error(&self, field: DraftField) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(field).map(|error| error.message(field))
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_submitting {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }

    /// Validates every field and, when the draft is valid, enters the
    /// submitting phase and returns the request to send.
    ///
    /// No request is produced while another one is in flight.
    pub fn begin_submit(&mut self) -> Result<CreateCardRequest, SubmitBlocked> {
        if self.is_submitting {
            tracing::debug!("Submit ignored: request already in flight");
            return Err(SubmitBlocked::InFlight);
        }

        self.touched.extend(DraftField::ALL);
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            tracing::debug!("Submit blocked by validation: {}", self.errors);
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }

        self.is_submitting = true;
        tracing::info!("Submitting card '{}'", self.draft.name);
        Ok(CreateCardRequest::from_draft(&self.draft))
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Success resets the form to empty; failure keeps the draft for
    /// another attempt. Either way the form is idle afterwards.
    pub fn settle(&mut self, outcome: CardPostResult<CreatedCard>) -> Notification {
        self.is_submitting = false;
        match outcome {
            Ok(card) => {
                tracing::info!("Card created: {}", card.name);
                self.reset();
                Notification::created(&card)
            }
            Err(error) => {
                tracing::warn!("Card creation failed: {}", error);
                Notification::failed(&error)
            }
        }
    }

    pub fn reset(&mut self) {
        self.draft.clear();
        self.errors.clear();
        self.touched.clear();
    }
}
