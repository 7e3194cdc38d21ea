//! Append-only transcript with monotonic message ids.

use super::message::{Message, QuickReply, Sender, WireTurn};
use super::welcome::{self, WELCOME_ID};

/// Ordered conversation, oldest first. Starts with the welcome message.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        let w = welcome::welcome();
        Self::with_welcome(w.text.clone(), w.options.clone())
    }
}

impl Transcript {
    /// New transcript seeded with a custom welcome message.
    pub fn with_welcome(text: String, options: Vec<QuickReply>) -> Self {
        let greeting = Message::new(WELCOME_ID, Sender::Bot, text).with_options(options);
        Self {
            messages: vec![greeting],
            next_id: WELCOME_ID + 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Append a message and return it. Ids are never reused.
    pub(crate) fn push(&mut self, sender: Sender, text: String) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text));
        &self.messages[self.messages.len() - 1]
    }

    /// Backend projection in conversation order, without the welcome message.
    pub fn wire_turns(&self) -> Vec<WireTurn> {
        self.messages
            .iter()
            .filter(|m| !is_welcome(m))
            .map(WireTurn::from)
            .collect()
    }

    /// Most recent message that carries quick replies.
    pub fn latest_quick_replies(&self) -> Option<&[QuickReply]> {
        self.messages.iter().rev().find_map(Message::quick_replies)
    }
}

fn is_welcome(msg: &Message) -> bool {
    msg.id == WELCOME_ID && msg.sender == Sender::Bot
}
