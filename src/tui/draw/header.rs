//! Header: brand, subtitle, backend host and menu-view flag.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::app::DISPLAY_NAME;

use super::super::app::App;
use super::super::constants::{ACCENT, LOGO};

const SUBTITLE: &str = "Virtual Customer Support";

pub(crate) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let right = if app.menu_view {
        format!("{} · menu view", app.endpoint_host)
    } else {
        app.endpoint_host.clone()
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(right.chars().count() as u16 + 1),
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            format!(" {} ", LOGO),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", DISPLAY_NAME),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(SUBTITLE, Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(brand), chunks[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        chunks[1],
    );
}
