//! Handler for main input (chat input, quick-reply focus, scroll).

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::constants;
use super::{HandleResult, KeyContext, send};

/// Handle keys that are not shortcuts.
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    ctx: KeyContext<'_>,
) -> HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Enter, _) => {
            let request = if ctx.app.input.trim().is_empty() {
                ctx.app.submit_focused_reply()
            } else {
                ctx.app.submit_input()
            };
            send(ctx, request);
        }
        (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
            ctx.app.focus_prev_reply()
        }
        (KeyCode::Tab, _) => ctx.app.focus_next_reply(),
        (KeyCode::Esc, _) => ctx.app.focused_reply = None,
        (KeyCode::Backspace, _) => {
            ctx.app.input.pop();
        }
        (KeyCode::Up, _) => ctx.app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => ctx.app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => ctx.app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => ctx.app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char(c), mods) => {
            // Ignore Ctrl/Alt+key: user likely intended a shortcut
            if mods.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
                return HandleResult::Continue;
            }
            ctx.app.input.push(c);
        }
        _ => {}
    }
    HandleResult::Continue
}
