//! Input box and bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use textwrap::core::display_width;

use super::super::app::App;
use super::super::constants::ACCENT;
use super::super::shortcuts::labels;

const PLACEHOLDER: &str = "Type your message...";

/// Longest suffix of `s` that fits in `width` columns.
fn visible_tail(s: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = display_width(ch.encode_utf8(&mut [0u8; 4]));
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

/// Draw the input block and set cursor position.
pub(crate) fn draw_input_block(f: &mut Frame, app: &App, area: Rect) {
    let border = if app.is_busy() { Color::DarkGray } else { ACCENT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    // One column stays free for the cursor.
    let shown = visible_tail(&app.input, (inner.width as usize).saturating_sub(1));
    let content = if app.input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(shown.to_string())
    };
    f.render_widget(
        Paragraph::new(Line::from(content))
            .block(block)
            .style(Style::default().fg(Color::White)),
        area,
    );
    let cx = inner.x + display_width(shown) as u16;
    f.set_cursor_position(Position::new(cx, inner.y));
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Paragraph::new(labels::bottom_bar(app.is_busy(), app.menu_view))
            .alignment(Alignment::Right),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::visible_tail;

    #[test]
    fn short_input_is_shown_whole() {
        assert_eq!(visible_tail("hello", 10), "hello");
    }

    #[test]
    fn long_input_keeps_the_end() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(visible_tail("ab🍕", 3), "b🍕");
    }

    #[test]
    fn zero_width_shows_nothing() {
        assert_eq!(visible_tail("abc", 0), "");
    }
}
