use crate::draft::{CardDraft, DraftField};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a validated draft, as sent to the create-card
/// endpoint. Text is passed through verbatim; dates are sent in the
/// trimmed form that validation parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCardRequest {
    pub name: String,
    pub desc: String,
    pub due: String,
    pub start: String,
}

impl CreateCardRequest {
    pub fn from_draft(draft: &CardDraft) -> Self {
        Self {
            name: draft.name.clone(),
            desc: draft.description.clone(),
            due: draft.due_date.trim().to_string(),
            start: draft.start_date.trim().to_string(),
        }
    }

    /// Draft-derived query parameters, in form order.
    pub fn query_params(&self) -> [(&'static str, &str); 4] {
        [
            (DraftField::Name.query_key(), self.name.as_str()),
            (DraftField::Description.query_key(), self.desc.as_str()),
            (DraftField::DueDate.query_key(), self.due.as_str()),
            (DraftField::StartDate.query_key(), self.start.as_str()),
        ]
    }
}

/// Fields of the created card the form cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCard {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "shortUrl", skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

impl CreatedCard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            url: None,
            short_url: None,
        }
    }
}
