use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::core::text::CitationFilter;

/// Backend used when `FOODIES_CHAT_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://foodies-chatbot.onrender.com/api/chat";

/// Long enough to ride out a cold start on free hosting.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub timeout: Duration,
    /// Render menu-looking bot replies as menu blocks instead of Markdown.
    pub menu_view: bool,
    /// Which citation tokens are stripped from replies.
    pub citations: CitationFilter,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FOODIES_CHAT_URL is not a valid http(s) URL: {0}")]
    InvalidEndpoint(String),
    #[error("FOODIES_CHAT_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("FOODIES_CITATIONS must be \"all\" or \"documents\", got {0:?}")]
    InvalidCitations(String),
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration from an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = parse_endpoint(
        lookup("FOODIES_CHAT_URL")
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT),
    )?;

    let timeout = match lookup("FOODIES_CHAT_TIMEOUT_SECS") {
        Some(raw) => parse_timeout(&raw)?,
        None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    };

    let menu_view = lookup("FOODIES_MENU_VIEW")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let citations = match lookup("FOODIES_CITATIONS") {
        Some(raw) => CitationFilter::parse(&raw).ok_or(ConfigError::InvalidCitations(raw))?,
        None => CitationFilter::default(),
    };

    Ok(Config {
        endpoint,
        timeout,
        menu_view,
        citations,
    })
}

impl Config {
    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = url {
            self.endpoint = parse_endpoint(url)?;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = parse_timeout(&secs.to_string())?;
        }
        Ok(self)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidEndpoint(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::InvalidEndpoint(raw.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
