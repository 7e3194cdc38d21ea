//! Markdown blocks to styled terminal lines.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::core::display_width;

use crate::core::text::markdown::inline_text;
use crate::core::text::{BULLET, Block, Inline};
use crate::tui::constants::{ACCENT, ACCENT_SECONDARY};

use super::wrap::{wrap_message, wrap_spans};

const QUOTE_PREFIX: &str = "│ ";
const CELL_SEPARATOR: &str = " │ ";

/// Render a block tree into lines no wider than `width` columns.
pub(crate) fn markdown_lines(blocks: &[Block], width: usize, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(block_lines(block, width, base));
    }
    lines
}

fn block_lines(block: &Block, width: usize, base: Style) -> Vec<Line<'static>> {
    match block {
        Block::Paragraph(content) => paragraph_lines(content, width, base),
        Block::Heading { level, content } => heading_lines(*level, content, width, base),
        Block::CodeBlock { lang, code } => code_block_lines(lang.as_deref(), code, width),
        Block::BlockQuote(inner) => quote_lines(inner, width, base),
        Block::List { items, .. } => list_lines(items, width, base),
        Block::Table { header, rows } => table_lines(header, rows, width, base),
        Block::Rule => vec![Line::from(Span::styled(
            "─".repeat(width.max(1)),
            Style::default().fg(Color::DarkGray),
        ))],
    }
}

fn paragraph_lines(content: &[Inline], width: usize, base: Style) -> Vec<Line<'static>> {
    split_breaks(inline_spans(content, base))
        .into_iter()
        .flat_map(|segment| wrap_spans(segment, width))
        .collect()
}

fn heading_lines(level: u8, content: &[Inline], width: usize, base: Style) -> Vec<Line<'static>> {
    let style = match level {
        1 => base
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => base.fg(ACCENT).add_modifier(Modifier::BOLD),
        _ => base.fg(ACCENT_SECONDARY).add_modifier(Modifier::BOLD),
    };
    paragraph_lines(content, width, style)
}

fn code_block_lines(lang: Option<&str>, code: &str, width: usize) -> Vec<Line<'static>> {
    let style = Style::default().fg(ACCENT_SECONDARY);
    let inner = width.saturating_sub(2).max(1);
    let header = format!("┌─ {} ", lang.unwrap_or("code"));
    let trail = width.saturating_sub(display_width(&header) + 1);
    let mut lines = vec![Line::from(Span::styled(
        format!("{}{}┐", header, "─".repeat(trail)),
        style,
    ))];
    let code = code.strip_suffix('\n').unwrap_or(code);
    for chunk in wrap_message(code, inner) {
        lines.push(Line::from(vec![
            Span::styled("│ ", style),
            Span::styled(chunk, style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width.saturating_sub(2))),
        style,
    )));
    lines
}

fn quote_lines(inner: &[Block], width: usize, base: Style) -> Vec<Line<'static>> {
    let quote_style = base.add_modifier(Modifier::ITALIC);
    let bar = Span::styled(QUOTE_PREFIX, Style::default().fg(Color::DarkGray));
    let body = markdown_lines(inner, width.saturating_sub(2).max(1), quote_style);
    prefix_lines(body, bar.clone(), bar)
}

fn list_lines(items: &[Vec<Block>], width: usize, base: Style) -> Vec<Line<'static>> {
    let marker = Span::styled(format!("{} ", BULLET), Style::default().fg(ACCENT));
    let indent = Span::raw("  ");
    let mut lines = Vec::new();
    for item in items {
        let body = markdown_lines(item, width.saturating_sub(2).max(1), base);
        let body = if body.is_empty() {
            vec![Line::default()]
        } else {
            body
        };
        lines.extend(prefix_lines(body, marker.clone(), indent.clone()));
    }
    lines
}

fn table_lines(
    header: &[Vec<Inline>],
    rows: &[Vec<Vec<Inline>>],
    width: usize,
    base: Style,
) -> Vec<Line<'static>> {
    let columns = std::iter::once(header)
        .chain(rows.iter().map(Vec::as_slice))
        .map(|r| r.len())
        .max()
        .unwrap_or(0);
    if columns == 0 {
        return Vec::new();
    }
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(&inline_text(cell)));
        }
    }
    let separators = display_width(CELL_SEPARATOR) * (columns - 1);
    let fits = widths.iter().sum::<usize>() + separators <= width;

    let border = Style::default().fg(ACCENT);
    let header_style = base.add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    if !header.is_empty() {
        lines.extend(table_row(header, &widths, fits, width, header_style, border));
        let rule = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        let rule = if fits { rule } else { "─".repeat(width.max(1)) };
        lines.push(Line::from(Span::styled(rule, border)));
    }
    for row in rows {
        lines.extend(table_row(row, &widths, fits, width, base, border));
    }
    lines
}

/// One table row: padded columns when the table fits, else cells joined and wrapped.
fn table_row(
    cells: &[Vec<Inline>],
    widths: &[usize],
    fits: bool,
    width: usize,
    style: Style,
    border: Style,
) -> Vec<Line<'static>> {
    let mut spans = Vec::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(CELL_SEPARATOR, border));
        }
        let cell_spans: Vec<Span<'static>> = inline_spans(cell, style)
            .into_iter()
            .map(|s| {
                if s.content == "\n" {
                    Span::styled(" ", s.style)
                } else {
                    s
                }
            })
            .collect();
        let used: usize = cell_spans.iter().map(|s| display_width(&s.content)).sum();
        spans.extend(cell_spans);
        if fits && i + 1 < widths.len() {
            spans.push(Span::raw(" ".repeat(widths[i].saturating_sub(used))));
        }
    }
    if fits {
        vec![Line::from(spans)]
    } else {
        wrap_spans(spans, width)
    }
}

/// Inline content as flat spans. Line breaks become a lone "\n" span.
fn inline_spans(inlines: &[Inline], style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => spans.push(Span::styled(t.clone(), style)),
            Inline::Code(t) => spans.push(Span::styled(t.clone(), style.fg(ACCENT))),
            Inline::Strong(c) => spans.extend(inline_spans(c, style.add_modifier(Modifier::BOLD))),
            Inline::Emphasis(c) => {
                spans.extend(inline_spans(c, style.add_modifier(Modifier::ITALIC)))
            }
            Inline::Strikethrough(c) => {
                spans.extend(inline_spans(c, style.add_modifier(Modifier::CROSSED_OUT)))
            }
            Inline::Link { children, .. } => spans.extend(inline_spans(
                children,
                style.fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            )),
            Inline::LineBreak => spans.push(Span::styled("\n", style)),
        }
    }
    spans
}

fn split_breaks(spans: Vec<Span<'static>>) -> Vec<Vec<Span<'static>>> {
    let mut out = vec![Vec::new()];
    for span in spans {
        if span.content == "\n" {
            out.push(Vec::new());
        } else if let Some(last) = out.last_mut() {
            last.push(span);
        }
    }
    out
}

/// Prefix the first line with `first` and the rest with `rest`.
fn prefix_lines(
    lines: Vec<Line<'static>>,
    first: Span<'static>,
    rest: Span<'static>,
) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { first.clone() } else { rest.clone() };
            let mut spans = vec![prefix];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}
