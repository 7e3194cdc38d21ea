//! HTTP client for the chat backend: one JSON POST per user turn.

mod error;
mod wire;

use reqwest::Url;
use serde_json::Value;

use crate::core::app;
use crate::core::config::Config;

pub use error::{ChatError, ErrorKind, map_request_error};
pub use wire::{ChatReply, ChatRequest, FALLBACK_REPLY};

/// Client bound to one backend endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BackendClient {
    /// Build a client whose every request is aborted after `config.timeout`.
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("{}/{}", app::NAME, app::VERSION))
            .build()
            .map_err(ChatError::Network)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the conversation and decode the reply.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        log::debug!(
            "POST {} ({} turns)",
            self.endpoint,
            request.messages.len()
        );
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_request_error)?
            .error_for_status()
            .map_err(map_request_error)?;
        let bytes = resp.bytes().await.map_err(map_request_error)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(ChatError::InvalidBody)?;
        let reply = ChatReply::from_value(&value);
        if reply.response.is_none() && reply.message.is_none() {
            log::warn!("Backend reply has no text field; using fallback");
        }
        Ok(reply)
    }

    /// GET the backend's root health route and return its JSON status.
    pub async fn health_check(&self) -> Result<Value, ChatError> {
        let mut url = self.endpoint.clone();
        url.set_path("/");
        url.set_query(None);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_request_error)?
            .error_for_status()
            .map_err(map_request_error)?;
        let bytes = resp.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&bytes).map_err(ChatError::InvalidBody)
    }
}
