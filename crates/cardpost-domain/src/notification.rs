use crate::request::CreatedCard;
use cardpost_core::CardPostError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One user-visible message per settled submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn created(card: &CreatedCard) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: format!("Card created successfully: {}", card.name),
        }
    }

    pub fn failed(error: &CardPostError) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: format!("Error creating card: {}", error.user_detail()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}
