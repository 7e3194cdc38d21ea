//! Shortcut key handling (QuickReply, ToggleMenuView, NewConversation, Quit).

use crate::tui::shortcuts::Shortcut;

use super::{HandleResult, KeyContext, send};

pub(super) fn handle_shortcut(shortcut: Shortcut, ctx: KeyContext<'_>) -> HandleResult {
    match shortcut {
        Shortcut::QuickReply(index) => {
            let request = ctx.app.submit_quick_reply(index);
            send(ctx, request);
        }
        Shortcut::ToggleMenuView => ctx.app.toggle_menu_view(),
        Shortcut::NewConversation => {
            // A reply still in flight belongs to the old conversation.
            *ctx.pending = None;
            ctx.app.new_conversation();
            log::info!("Started a new conversation");
        }
        Shortcut::Quit => return HandleResult::Break,
    }
    HandleResult::Continue
}
