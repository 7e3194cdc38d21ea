//! Chat history: message blocks, quick-reply buttons, typing indicator, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use textwrap::core::display_width;

use crate::core::message::{Message, QuickReply};
use crate::core::text;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY, TEXT, TYPING_FRAME_MS, TYPING_FRAMES};
use super::super::text::{markdown_lines, menu_lines, wrap_message};

const BOT_LABEL: &str = "Foodies";
const USER_LABEL: &str = "You";

/// Body of one message, before the border is added.
fn body_lines(msg: &Message, width: usize, menu_view: bool) -> Vec<Line<'static>> {
    if msg.is_user() {
        let style = Style::default().fg(Color::White);
        return wrap_message(&msg.text, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, style)))
            .collect();
    }
    let base = Style::default().fg(TEXT);
    if menu_view && text::looks_like_menu(&msg.text) {
        menu_lines(&text::format_as_menu(&msg.text), width, base)
    } else {
        markdown_lines(&text::render_markdown(&msg.text), width, base)
    }
}

/// Quick replies as buttons, packed greedily into lines. `focused` is highlighted.
fn reply_lines(replies: &[QuickReply], focused: Option<usize>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for (i, reply) in replies.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, reply.label);
        let w = display_width(&label);
        if used > 0 && used + 1 + w > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if used > 0 {
            current.push(Span::raw(" "));
            used += 1;
        }
        let style = if focused == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).bg(Color::Rgb(60, 50, 20))
        };
        current.push(Span::styled(label, style));
        used += w;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Add one bordered message block: "┌─ Label HH:MM ───┐", body, "└───┘".
fn add_message_block(
    lines: &mut Vec<Line<'static>>,
    msg: &Message,
    body: Vec<Line<'static>>,
    wrap_width: usize,
) {
    let (label, border_color) = if msg.is_user() {
        (USER_LABEL, Color::DarkGray)
    } else {
        (BOT_LABEL, ACCENT_SECONDARY)
    };
    let border_style = Style::default().fg(border_color);
    let top_label = format!("┌─ {} {} ", label, msg.timestamp.format("%H:%M"));
    let trail = wrap_width.saturating_sub(display_width(&top_label) + 1);
    lines.push(Line::from(Span::styled(
        format!("{}{}┐", top_label, "─".repeat(trail)),
        border_style,
    )));
    for line in body {
        let mut spans = vec![Span::styled("│ ", border_style)];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(wrap_width.saturating_sub(2))),
        border_style,
    )));
    lines.push(Line::default());
}

fn typing_line(app: &App) -> Line<'static> {
    let elapsed = app
        .request_started_at
        .map(|t| t.elapsed().as_millis())
        .unwrap_or_default();
    let frame = (elapsed / TYPING_FRAME_MS) as usize % TYPING_FRAMES.len();
    Line::from(vec![
        Span::styled(
            format!("  {} is typing ", BOT_LABEL),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        Span::styled(TYPING_FRAMES[frame], Style::default().fg(ACCENT)),
    ])
}

/// Every history line for the given width.
fn history_lines(app: &App, wrap_width: usize) -> Vec<Line<'static>> {
    let content_width = wrap_width.saturating_sub(4).max(1);
    let offered = app.quick_replies();
    let mut lines = Vec::new();
    for msg in app.session.messages() {
        let mut body = body_lines(msg, content_width, app.menu_view);
        if let Some(replies) = msg.quick_replies() {
            // Focus only applies to the set Tab cycles through.
            let focused = if std::ptr::eq(replies, offered) {
                app.focused_reply
            } else {
                None
            };
            body.push(Line::default());
            body.extend(reply_lines(replies, focused, content_width));
        }
        add_message_block(&mut lines, msg, body, wrap_width);
    }
    if app.is_busy() {
        lines.push(typing_line(app));
    }
    lines
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];

    let lines = history_lines(app, text_area.width as usize);

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line().min(max_scroll);
    let end = (scroll_pos + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll_pos)
        .take(end - scroll_pos)
        .collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
