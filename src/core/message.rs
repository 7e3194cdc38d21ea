//! Transcript entries and their backend projection.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A suggested reply shown as a button under a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickReply {
    /// Text on the button.
    pub label: String,
    /// Text submitted when the button is chosen.
    pub value: String,
}

/// One entry in the transcript. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub options: Option<Vec<QuickReply>>,
}

impl Message {
    pub(crate) fn new(id: u64, sender: Sender, text: String) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp: Local::now(),
            options: None,
        }
    }

    pub(crate) fn with_options(mut self, options: Vec<QuickReply>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Quick replies carried by this message, if any (empty lists count as none).
    pub fn quick_replies(&self) -> Option<&[QuickReply]> {
        self.options.as_deref().filter(|o| !o.is_empty())
    }
}

/// Backend role of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Backend-facing projection of a message: `{"role": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTurn {
    pub role: Role,
    pub content: String,
}

impl WireTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

impl From<&Message> for WireTurn {
    fn from(msg: &Message) -> Self {
        let role = match msg.sender {
            Sender::User => Role::User,
            Sender::Bot => Role::Assistant,
        };
        Self {
            role,
            content: msg.text.clone(),
        }
    }
}
