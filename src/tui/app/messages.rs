//! Sending turns and moving quick-reply focus.

use std::time::Instant;

use crate::core::backend::{ChatError, ChatReply, ChatRequest};
use crate::core::message::QuickReply;

use super::{App, ScrollPosition};

impl App {
    /// Quick replies currently offered, from the latest message that has any.
    pub(crate) fn quick_replies(&self) -> &[QuickReply] {
        self.session
            .transcript()
            .latest_quick_replies()
            .unwrap_or_default()
    }

    /// Submit the input field. The field is cleared only when the turn is accepted.
    pub(crate) fn submit_input(&mut self) -> Option<ChatRequest> {
        let request = self.session.submit(&self.input)?;
        self.input.clear();
        self.after_submit();
        Some(request)
    }

    /// Submit the quick reply at `index`, as if its value were typed.
    pub(crate) fn submit_quick_reply(&mut self, index: usize) -> Option<ChatRequest> {
        let reply = self.quick_replies().get(index)?.clone();
        let request = self.session.select_quick_reply(&reply)?;
        self.after_submit();
        Some(request)
    }

    /// Submit the focused quick reply, if any.
    pub(crate) fn submit_focused_reply(&mut self) -> Option<ChatRequest> {
        let index = self.focused_reply?;
        self.submit_quick_reply(index)
    }

    fn after_submit(&mut self) {
        self.focused_reply = None;
        self.request_started_at = Some(Instant::now());
        self.scroll = ScrollPosition::Bottom;
    }

    /// Append the outcome of the in-flight request.
    pub(crate) fn apply_result(&mut self, result: Result<ChatReply, ChatError>) {
        if let Some(elapsed) = self.request_started_at.take().map(|t| t.elapsed()) {
            log::debug!("Reply settled after {:.1}s", elapsed.as_secs_f32());
        }
        if self.session.resolve(result).is_some() {
            self.scroll = ScrollPosition::Bottom;
        }
    }

    pub(crate) fn focus_next_reply(&mut self) {
        let n = self.quick_replies().len();
        if n == 0 {
            return;
        }
        self.focused_reply = Some(match self.focused_reply {
            Some(i) => (i + 1) % n,
            None => 0,
        });
    }

    pub(crate) fn focus_prev_reply(&mut self) {
        let n = self.quick_replies().len();
        if n == 0 {
            return;
        }
        self.focused_reply = Some(match self.focused_reply {
            Some(0) | None => n - 1,
            Some(i) => i - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::App;
    use crate::core::backend::{ChatError, ChatReply};
    use crate::core::config::Config;
    use crate::core::message::Sender;
    use crate::core::session::TIMEOUT_REPLY;

    fn app() -> App {
        let config = Config {
            endpoint: reqwest::Url::parse("http://localhost:3000/api/chat").unwrap(),
            timeout: Duration::from_secs(60),
            menu_view: false,
            citations: Default::default(),
        };
        App::new(&config)
    }

    #[test]
    fn submit_input_clears_field_and_awaits() {
        let mut app = app();
        app.input = "  Are you open?  ".to_string();
        let request = app.submit_input().unwrap();
        assert_eq!(request.messages.last().unwrap().content, "Are you open?");
        assert!(app.input.is_empty());
        assert!(app.is_busy());
        assert!(app.request_started_at.is_some());
    }

    #[test]
    fn rejected_submit_keeps_draft() {
        let mut app = app();
        app.input = "first".to_string();
        app.submit_input().unwrap();
        app.input = "second".to_string();
        assert!(app.submit_input().is_none());
        assert_eq!(app.input, "second");
    }

    #[test]
    fn quick_reply_by_index_sends_value() {
        let mut app = app();
        let expected = app.quick_replies()[2].value.clone();
        let request = app.submit_quick_reply(2).unwrap();
        assert_eq!(request.messages.last().unwrap().content, expected);
        assert!(app.submit_quick_reply(0).is_none());
    }

    #[test]
    fn quick_reply_out_of_range_is_ignored() {
        let mut app = app();
        assert!(app.submit_quick_reply(42).is_none());
        assert!(!app.is_busy());
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut app = app();
        let n = app.quick_replies().len();
        app.focus_prev_reply();
        assert_eq!(app.focused_reply, Some(n - 1));
        app.focus_next_reply();
        assert_eq!(app.focused_reply, Some(0));
        app.focus_next_reply();
        assert_eq!(app.focused_reply, Some(1));
    }

    #[test]
    fn focused_reply_is_sent_and_cleared() {
        let mut app = app();
        assert!(app.submit_focused_reply().is_none());
        app.focus_next_reply();
        assert!(app.submit_focused_reply().is_some());
        assert_eq!(app.focused_reply, None);
    }

    #[test]
    fn apply_result_appends_bot_message() {
        let mut app = app();
        app.input = "hi".to_string();
        app.submit_input().unwrap();
        app.apply_result(Ok(ChatReply {
            response: Some("Hello there".to_string()),
            message: None,
        }));
        let last = app.session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "Hello there");
        assert!(!app.is_busy());
        assert!(app.request_started_at.is_none());
    }

    #[test]
    fn apply_timeout_shows_waking_up_notice() {
        let mut app = app();
        app.input = "hi".to_string();
        app.submit_input().unwrap();
        app.apply_result(Err(ChatError::Timeout));
        assert_eq!(app.session.messages().last().unwrap().text, TIMEOUT_REPLY);
    }
}
