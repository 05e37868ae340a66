//! Error type shared by the REST helpers in `net::api`.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint helper returns `Result<T, ApiError>`. Components decide what
//! a failure means for the user: the share flow turns it into a toast, the
//! like/save buttons and pollers only log it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request/response exchange with the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A value could not be serialized (snapshot or request body).
    #[error("encode failed: {0}")]
    Encode(String),
    /// The server answered `ok: false`, optionally with its own message.
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
    /// Called outside a browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided rejection message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(Some(msg)) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
