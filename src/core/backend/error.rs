//! Backend error types.

/// Errors from a chat round trip. Every variant ends up as a bot message.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("backend reply is not JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),
    /// The task carrying the request ended without reporting back.
    #[error("request was interrupted")]
    Interrupted,
}

/// Coarse classification used to pick the apology shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Network,
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Timeout => ErrorKind::Timeout,
            ChatError::Network(_)
            | ChatError::Status(_)
            | ChatError::InvalidBody(_)
            | ChatError::Interrupted => ErrorKind::Network,
        }
    }
}

/// Map a reqwest failure into ChatError.
pub fn map_request_error(e: reqwest::Error) -> ChatError {
    if e.is_timeout() {
        return ChatError::Timeout;
    }
    if let Some(status) = e.status() {
        return ChatError::Status(status);
    }
    ChatError::Network(e)
}
