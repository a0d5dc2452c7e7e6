//! Client Error Taxonomy
//!
//! Every fallible operation in the client returns [`ClientError`].

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected credentials, or a missing/expired token (HTTP 401)
    #[error("{}", .message.as_deref().unwrap_or("Authentication failed"))]
    Auth { message: Option<String> },

    /// Client-side form rule violation; never reaches the server
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx response
    #[error("{}", request_failed(.status, .message))]
    Request { status: u16, message: Option<String> },

    /// No response received
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

fn request_failed(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status {}", status),
    }
}

impl ClientError {
    /// Text the server put in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Auth { message } | ClientError::Request { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Server text when present, otherwise the caller's per-action fallback.
    /// Validation errors always carry their own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            other => other
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth { .. })
    }
}
