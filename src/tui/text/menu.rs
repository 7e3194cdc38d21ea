//! Menu view: category headings and price rows with the value flush right.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::core::display_width;

use crate::core::text::DisplayBlock;
use crate::tui::constants::{ACCENT, ACCENT_SECONDARY};

use super::wrap::wrap_message;

pub(crate) fn menu_lines(blocks: &[DisplayBlock], width: usize, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        match block {
            DisplayBlock::Heading(text) => {
                if i > 0 {
                    lines.push(Line::default());
                }
                let style = base.fg(ACCENT).add_modifier(Modifier::BOLD);
                lines.extend(
                    wrap_message(text, width)
                        .into_iter()
                        .map(|l| Line::from(Span::styled(l, style))),
                );
            }
            DisplayBlock::MenuRow { name, value } => {
                lines.push(menu_row(name, value, width, base));
            }
            DisplayBlock::Paragraph(text) => {
                let style = base.add_modifier(Modifier::ITALIC);
                lines.extend(
                    wrap_message(text, width)
                        .into_iter()
                        .map(|l| Line::from(Span::styled(l, style))),
                );
            }
        }
    }
    lines
}

/// `name ····· value` on one line; the name is cut when both do not fit.
fn menu_row(name: &str, value: &str, width: usize, base: Style) -> Line<'static> {
    let value_w = display_width(value);
    let room = width.saturating_sub(value_w + 1);
    let name = truncate(name, room);
    let gap = width.saturating_sub(display_width(&name) + value_w).max(1);
    Line::from(vec![
        Span::styled(name, base),
        Span::styled(" ".repeat(gap), base),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = display_width(ch.encode_utf8(&mut [0u8; 4]));
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
