//! Text wrapping for display.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use textwrap::core::display_width;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            for chunk in wrap_text(line, width) {
                out.push(chunk);
            }
        }
    }
    out
}

/// One styled word or run of spaces.
struct Piece {
    text: String,
    style: Style,
    is_space: bool,
}

fn pieces(spans: &[Span<'static>]) -> Vec<Piece> {
    let mut out: Vec<Piece> = Vec::new();
    for span in spans {
        for ch in span.content.chars() {
            let is_space = ch == ' ';
            match out.last_mut() {
                Some(last) if last.is_space == is_space && last.style == span.style => {
                    last.text.push(ch)
                }
                _ => out.push(Piece {
                    text: ch.to_string(),
                    style: span.style,
                    is_space,
                }),
            }
        }
    }
    out
}

/// Greedy word wrap over styled spans. Words wider than `width` are split hard.
/// Leading spaces of a wrapped line are dropped.
pub(crate) fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for piece in pieces(&spans) {
        let w = display_width(&piece.text);
        if piece.is_space {
            if used == 0 || used + w > width {
                continue;
            }
            current.push(Span::styled(piece.text, piece.style));
            used += w;
            continue;
        }
        if used + w > width && used > 0 {
            trim_trailing_space(&mut current);
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if w <= width {
            current.push(Span::styled(piece.text, piece.style));
            used += w;
            continue;
        }
        let mut chunk = String::new();
        for ch in piece.text.chars() {
            let cw = display_width(ch.encode_utf8(&mut [0u8; 4]));
            if used + cw > width && used > 0 {
                current.push(Span::styled(std::mem::take(&mut chunk), piece.style));
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(ch);
            used += cw;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, piece.style));
        }
    }
    trim_trailing_space(&mut current);
    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

fn trim_trailing_space(spans: &mut Vec<Span<'static>>) {
    while spans.last().is_some_and(|s| s.content.trim().is_empty()) {
        spans.pop();
    }
}
