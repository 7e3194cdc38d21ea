//! JSON bodies exchanged with the chat backend.

use serde::Serialize;
use serde_json::Value;

use crate::core::message::WireTurn;

/// Text used when a successful reply carries no usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process that.";

/// Request body: `{"messages": [{"role": "user", "content": "..."}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<WireTurn>,
}

/// Successful reply. Only the `response` and `message` fields are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub response: Option<String>,
    pub message: Option<String>,
}

impl ChatReply {
    /// Pick the text fields out of any JSON value. Non-string or empty fields count as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            response: field("response"),
            message: field("message"),
        }
    }

    /// `response`, else `message`, else [`FALLBACK_REPLY`].
    pub fn text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or(FALLBACK_REPLY)
    }
}
