//! Conversation controller: owns the transcript and the submit protocol.
//!
//! One request may be outstanding at a time. `submit` while awaiting is rejected,
//! not queued; every outcome of the request (reply, timeout, failure) appends exactly
//! one bot message and reopens the session.

use crate::core::backend::{BackendClient, ChatError, ChatReply, ChatRequest, ErrorKind};
use crate::core::message::{Message, QuickReply, Sender, WireTurn};
use crate::core::text::{self, CitationFilter};
use crate::core::transcript::Transcript;

/// Shown when the backend did not answer within the timeout.
pub const TIMEOUT_REPLY: &str =
    "The server is waking up (this happens on free hosting). Please try again in a moment! 😊";

/// Shown for every other failure.
pub const ERROR_REPLY: &str = "Oops! Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Awaiting,
}

/// A chat session: transcript plus in-flight flag. Owned by the hosting app.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Transcript,
    status: Status,
    citations: CitationFilter,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which citation tokens are stripped from replies.
    pub fn with_citations(mut self, citations: CitationFilter) -> Self {
        self.citations = citations;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == Status::Awaiting
    }

    /// Append the trimmed input as a user message and return the request to send.
    /// Returns `None` without touching the transcript if the input is blank or a
    /// request is already outstanding.
    pub fn submit(&mut self, raw_input: &str) -> Option<ChatRequest> {
        let text = raw_input.trim();
        if text.is_empty() {
            return None;
        }
        if self.is_busy() {
            log::debug!("Submit ignored: a request is already in flight");
            return None;
        }
        // Projection is taken before the new turn is appended, then the turn goes last.
        let mut messages = self.transcript.wire_turns();
        messages.push(WireTurn::user(text));
        self.transcript.push(Sender::User, text.to_string());
        self.status = Status::Awaiting;
        log::debug!("Submitted user turn ({} turns in request)", messages.len());
        Some(ChatRequest { messages })
    }

    /// Submit a quick reply's value, as if typed.
    pub fn select_quick_reply(&mut self, reply: &QuickReply) -> Option<ChatRequest> {
        self.submit(&reply.value)
    }

    /// Append the cleaned backend reply as a bot message.
    pub fn resolve_success(&mut self, reply: &ChatReply) -> Option<&Message> {
        if !self.is_busy() {
            log::warn!("Reply arrived with no request in flight; ignored");
            return None;
        }
        let sources = text::extract_citations(reply.text());
        if !sources.is_empty() {
            log::debug!("Reply cites: {}", sources.join(", "));
        }
        let cleaned = self.citations.strip(reply.text());
        Some(self.finish(cleaned))
    }

    /// Append the apology matching the failure.
    pub fn resolve_failure(&mut self, error: &ChatError) -> Option<&Message> {
        if !self.is_busy() {
            log::warn!("Failure reported with no request in flight; ignored: {}", error);
            return None;
        }
        log::warn!("Chat request failed: {}", error);
        let reply = match error.kind() {
            ErrorKind::Timeout => TIMEOUT_REPLY,
            ErrorKind::Network => ERROR_REPLY,
        };
        Some(self.finish(reply.to_string()))
    }

    pub fn resolve(&mut self, result: Result<ChatReply, ChatError>) -> Option<&Message> {
        match result {
            Ok(reply) => self.resolve_success(&reply),
            Err(e) => self.resolve_failure(&e),
        }
    }

    /// Submit and wait for the backend in one step.
    pub async fn round_trip(
        &mut self,
        client: &BackendClient,
        raw_input: &str,
    ) -> Option<&Message> {
        let request = self.submit(raw_input)?;
        let result = client.send(&request).await;
        self.resolve(result)
    }

    /// Drop the conversation and start again from the welcome message.
    pub fn reset(&mut self) {
        self.transcript = Transcript::default();
        self.status = Status::Idle;
    }

    fn finish(&mut self, text: String) -> &Message {
        self.status = Status::Idle;
        self.transcript.push(Sender::Bot, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::FALLBACK_REPLY;
    use crate::core::config::Config;
    use crate::core::message::Role;
    use crate::core::welcome::WELCOME_ID;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn submit_appends_trimmed_user_message_and_awaits() {
        let mut session = ChatSession::new();
        let request = session.submit("  Where are you located?  ").unwrap();
        assert_eq!(session.status(), Status::Awaiting);
        assert_eq!(session.messages().len(), 2);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, "Where are you located?");
        assert_eq!(request.messages, vec![WireTurn::user("Where are you located?")]);
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut session = ChatSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit(" \n\t ").is_none());
        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn submit_while_awaiting_is_rejected() {
        let mut session = ChatSession::new();
        session.submit("first").unwrap();
        assert!(session.submit("second").is_none());
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_busy());
    }

    #[test]
    fn request_excludes_welcome_and_ends_with_new_turn() {
        let mut session = ChatSession::new();
        session.submit("Hours?").unwrap();
        session.resolve_success(&ChatReply {
            response: Some("9 to 5".to_string()),
            message: None,
        });
        let request = session.submit("Weekends?").unwrap();
        let roles: Vec<Role> = request.messages.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(request.messages[2].content, "Weekends?");
        assert!(request.messages.iter().all(|t| !t.content.starts_with("Hello!")));
    }

    #[test]
    fn success_strips_citations_and_returns_to_idle() {
        let mut session = ChatSession::new();
        session.submit("menu").unwrap();
        let msg = session
            .resolve_success(&ChatReply {
                response: Some("Pizza is $10【4:0†Menu.pdf】.".to_string()),
                message: None,
            })
            .unwrap();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, "Pizza is $10.");
        assert_eq!(session.status(), Status::Idle);
    }

    #[test]
    fn document_filter_keeps_other_citations() {
        let mut session = ChatSession::new().with_citations(CitationFilter::Documents);
        session.submit("menu").unwrap();
        let msg = session
            .resolve_success(&ChatReply {
                response: Some("Pizza【4:0†Menu.pdf】 daily【5:1†Specials】".to_string()),
                message: None,
            })
            .unwrap();
        assert_eq!(msg.text, "Pizza daily【5:1†Specials】");
    }

    #[test]
    fn reset_keeps_citation_filter() {
        let mut session = ChatSession::new().with_citations(CitationFilter::Documents);
        session.reset();
        assert_eq!(session.citations, CitationFilter::Documents);
    }

    #[test]
    fn malformed_reply_uses_fallback_text() {
        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        let msg = session
            .resolve_success(&ChatReply::from_value(&serde_json::json!({})))
            .unwrap();
        assert_eq!(msg.text, FALLBACK_REPLY);
    }

    #[test]
    fn timeout_yields_waking_up_message() {
        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        let msg = session.resolve_failure(&ChatError::Timeout).unwrap();
        assert_eq!(msg.text, TIMEOUT_REPLY);
        assert!(!session.is_busy());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn other_failures_yield_generic_apology() {
        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        let msg = session
            .resolve_failure(&ChatError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
            .unwrap();
        assert_eq!(msg.text, ERROR_REPLY);
        assert!(!session.is_busy());
    }

    #[test]
    fn resolving_while_idle_changes_nothing() {
        let mut session = ChatSession::new();
        assert!(session.resolve_failure(&ChatError::Timeout).is_none());
        assert!(session.resolve_success(&ChatReply::default()).is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn quick_reply_submits_its_value() {
        let mut session = ChatSession::new();
        let reply = session.transcript().latest_quick_replies().unwrap()[1].clone();
        let request = session.select_quick_reply(&reply).unwrap();
        assert_eq!(request.messages.last().unwrap().content, reply.value);
        assert_eq!(session.messages().last().unwrap().text, reply.value);
    }

    #[test]
    fn message_ids_stay_unique() {
        let mut session = ChatSession::new();
        for i in 0..20 {
            session.submit(&format!("q{}", i)).unwrap();
            session.resolve_failure(&ChatError::Timeout);
        }
        let mut ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids[0], WELCOME_ID);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 41);
    }

    #[test]
    fn reset_restores_welcome_only() {
        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        session.reset();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.status(), Status::Idle);
    }

    fn client_for(server: &MockServer, timeout: Duration) -> BackendClient {
        let config = Config {
            endpoint: reqwest::Url::parse(&format!("{}/api/chat", server.uri())).unwrap(),
            timeout,
            menu_view: false,
            citations: Default::default(),
        };
        BackendClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn round_trip_timeout_reopens_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(50));
        let mut session = ChatSession::new();
        let text = session.round_trip(&client, "hello").await.unwrap().text.clone();
        assert_eq!(text, TIMEOUT_REPLY);
        assert!(!session.is_busy());
        assert_eq!(session.messages().len(), 3);
    }

    #[tokio::test]
    async fn round_trip_empty_json_reply_is_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let mut session = ChatSession::new();
        let text = session.round_trip(&client, "hello").await.unwrap().text.clone();
        assert_eq!(text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn round_trip_server_error_is_generic_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let mut session = ChatSession::new();
        let text = session.round_trip(&client, "hello").await.unwrap().text.clone();
        assert_eq!(text, ERROR_REPLY);
    }
}
