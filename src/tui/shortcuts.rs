//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action             | Keys                   |
//! |--------------------|------------------------|
//! | Send               | Enter                  |
//! | Focus quick reply  | Tab / Shift+Tab        |
//! | Send quick reply n | Alt+1 .. Alt+9         |
//! | Clear focus        | Esc                    |
//! | Scroll             | ↑ ↓ PageUp PageDown    |
//! | Menu view          | F2                     |
//! | New conversation   | Ctrl+L                 |
//! | Quit               | Ctrl+C                 |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Send the n-th quick reply (0-based)
    QuickReply(usize),
    /// Toggle menu rendering of bot replies (F2)
    ToggleMenuView,
    /// Start over from the welcome message (Ctrl+L)
    NewConversation,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::NewConversation)
            }
            KeyCode::F(2) => Some(Shortcut::ToggleMenuView),
            KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::QuickReply(c as usize - '1' as usize))
            }
            _ => None,
        }
    }
}

/// Key hints for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar(is_busy: bool, menu_view: bool) -> Line<'static> {
        let mut spans = if is_busy {
            vec![Span::styled("waiting for reply", Color::Yellow)]
        } else {
            vec![
                Span::styled("Enter ", DIM),
                Span::raw("send"),
                Span::styled("  Tab ", DIM),
                Span::raw("quick reply"),
                Span::styled("  Alt+1-9 ", DIM),
                Span::raw("pick"),
            ]
        };
        spans.extend([
            Span::styled("  ↑↓ ", DIM),
            Span::raw("scroll"),
            Span::styled("  F2 ", DIM),
            Span::raw(if menu_view { "markdown" } else { "menu view" }),
            Span::styled("  Ctrl+L ", DIM),
            Span::raw("new"),
            Span::styled("  Ctrl+C ", DIM),
            Span::raw("quit"),
        ]);
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn plain_c_is_not_a_shortcut() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn alt_digit_selects_quick_reply() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('1'), KeyModifiers::ALT)),
            Some(Shortcut::QuickReply(0))
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('3'), KeyModifiers::ALT)),
            Some(Shortcut::QuickReply(2))
        );
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('0'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn f2_toggles_menu_view() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::F(2), KeyModifiers::empty())),
            Some(Shortcut::ToggleMenuView)
        );
    }

    #[test]
    fn ctrl_l_new_conversation() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Shortcut::NewConversation)
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut k = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        k.kind = KeyEventKind::Release;
        assert_eq!(Shortcut::match_key(&k), None);
    }
}
