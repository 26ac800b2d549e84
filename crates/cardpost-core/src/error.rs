use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardPostError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The remote API answered with a non-success status or an unreadable body.
    #[error("Remote error ({status}): {detail}")]
    Remote { status: u16, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl CardPostError {
    /// Text shown to the user after a failed submission.
    ///
    /// Remote failures surface the server-provided detail verbatim; transport
    /// failures surface the transport message.
    pub fn user_detail(&self) -> String {
        match self {
            CardPostError::Network(message) => message.clone(),
            CardPostError::Remote { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, CardPostError::Network(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, CardPostError::Remote { .. })
    }
}
