//! TUI constants: colors, timing, and scroll amounts.

use ratatui::style::Color;

/// Brand yellow (#FFCC66): user bubbles, bullets, quick replies.
pub(super) const ACCENT: Color = Color::Rgb(255, 204, 102);

/// Deeper yellow (#FACC15) for heading rules and borders.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(250, 204, 21);

/// Body text on bot messages.
pub(super) const TEXT: Color = Color::Rgb(209, 213, 219);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_HEIGHT: u16 = 3;

/// Logo shown in the header and next to bot messages.
pub(super) const LOGO: &str = "F";

/// Typing indicator frames while a reply is awaited.
pub(super) const TYPING_FRAMES: &[&str] = &["●○○", "○●○", "○○●"];

/// Milliseconds per typing indicator frame.
pub(super) const TYPING_FRAME_MS: u128 = 200;
