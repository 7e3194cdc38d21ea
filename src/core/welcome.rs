//! Greeting that seeds every transcript.
//!
//! Loaded from `config/welcome.json` (embedded at compile time, validated by build.rs).

use std::sync::OnceLock;

use serde::Deserialize;

use super::message::QuickReply;

/// Id reserved for the welcome message; it is never sent to the backend.
pub const WELCOME_ID: u64 = 1;

#[derive(Debug, Deserialize)]
pub struct Welcome {
    pub text: String,
    pub options: Vec<QuickReply>,
}

fn load_welcome() -> Welcome {
    let json = include_str!("../../config/welcome.json");
    serde_json::from_str(json).expect("welcome.json must be valid")
}

static WELCOME: OnceLock<Welcome> = OnceLock::new();

/// Returns the welcome text and quick replies, parsing the config on first access.
pub fn welcome() -> &'static Welcome {
    WELCOME.get_or_init(load_welcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_has_text_and_three_quick_replies() {
        let w = welcome();
        assert!(w.text.starts_with("Hello! Welcome to Foodies."));
        assert_eq!(w.options.len(), 3);
        assert_eq!(w.options[2].value, "Show me the full menu");
    }
}
