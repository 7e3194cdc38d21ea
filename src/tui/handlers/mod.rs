//! Event handlers for the TUI: keyboard and mouse.

mod chat_spawn;
mod input;
mod shortcuts;

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::backend::{BackendClient, ChatError, ChatReply, ChatRequest};

use super::app::App;
use super::constants;
use super::shortcuts::Shortcut;

use self::shortcuts::handle_shortcut;

/// Receiver for the reply to the request in flight.
pub struct PendingReply {
    pub result_rx: mpsc::Receiver<Result<ChatReply, ChatError>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct KeyContext<'a> {
    pub app: &'a mut App,
    pub client: &'a BackendClient,
    pub pending: &'a mut Option<PendingReply>,
    pub rt: &'a Arc<Runtime>,
}

/// Spawn the request if the session accepted a turn.
fn send(ctx: KeyContext<'_>, request: Option<ChatRequest>) {
    if let Some(request) = request {
        *ctx.pending = Some(chat_spawn::spawn_request(ctx.rt, ctx.client.clone(), request));
    }
}

/// Handle a mouse event: the wheel scrolls the history.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => app.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: KeyContext<'_>) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    if let Some(shortcut) = Shortcut::match_key(&key) {
        return handle_shortcut(shortcut, ctx);
    }
    input::handle_main_input(key.code, key.modifiers, ctx)
}
