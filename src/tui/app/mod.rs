//! TUI application state: session, input, scroll, quick-reply focus.

mod messages;

use std::time::Instant;

use crate::core::config::Config;
use crate::core::session::{ChatSession, Status};

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub struct App {
    pub(crate) session: ChatSession,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Quick reply highlighted with Tab; Enter on empty input sends it.
    pub(crate) focused_reply: Option<usize>,
    /// Render menu-like bot replies as aligned rows instead of Markdown.
    pub(crate) menu_view: bool,
    /// When the in-flight request was sent; drives the typing indicator.
    pub(crate) request_started_at: Option<Instant>,
    /// Backend host shown in the header.
    pub endpoint_host: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: ChatSession::new().with_citations(config.citations),
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            focused_reply: None,
            menu_view: config.menu_view,
            request_started_at: None,
            endpoint_host: config
                .endpoint
                .host_str()
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.session.status() == Status::Awaiting
    }

    /// Start over from the welcome message.
    pub(crate) fn new_conversation(&mut self) {
        self.session.reset();
        self.input.clear();
        self.focused_reply = None;
        self.request_started_at = None;
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
    }

    pub(crate) fn toggle_menu_view(&mut self) {
        self.menu_view = !self.menu_view;
        log::debug!("Menu view {}", if self.menu_view { "on" } else { "off" });
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            let pos = (pos + n).min(self.last_max_scroll);
            self.scroll = if pos == self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(pos)
            };
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}
