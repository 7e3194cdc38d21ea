use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::text::{format_as_menu, render_markdown};

use super::wrap::wrap_spans;
use super::{markdown_lines, menu_lines, wrap_message};

fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn render(md: &str, width: usize) -> Vec<String> {
    markdown_lines(&render_markdown(md), width, Style::default())
        .iter()
        .map(plain)
        .collect()
}

#[test]
fn wrap_message_keeps_blank_lines() {
    assert_eq!(wrap_message("a\n\nb", 10), vec!["a", "", "b"]);
}

#[test]
fn wrap_message_wraps_long_line() {
    let lines = wrap_message("one two three four", 9);
    assert!(lines.iter().all(|l| l.chars().count() <= 9));
    assert_eq!(lines.join(" "), "one two three four");
}

#[test]
fn wrap_spans_breaks_between_words() {
    let lines = wrap_spans(vec![Span::raw("open daily from nine")], 10);
    let text: Vec<String> = lines.iter().map(plain).collect();
    assert_eq!(text, vec!["open daily", "from nine"]);
}

#[test]
fn wrap_spans_splits_overlong_word() {
    let lines = wrap_spans(vec![Span::raw("abcdefghij")], 4);
    let text: Vec<String> = lines.iter().map(plain).collect();
    assert_eq!(text, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn wrap_spans_keeps_styles_across_lines() {
    let bold = Style::default().add_modifier(ratatui::style::Modifier::BOLD);
    let lines = wrap_spans(vec![Span::raw("Call "), Span::styled("now please", bold)], 8);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].spans[0].style, bold);
}

#[test]
fn wrap_spans_empty_input_is_one_empty_line() {
    let lines = wrap_spans(Vec::new(), 10);
    assert_eq!(lines.len(), 1);
    assert!(plain(&lines[0]).is_empty());
}

#[test]
fn soft_breaks_become_lines() {
    assert_eq!(render("Mon-Fri\nSat-Sun", 40), vec!["Mon-Fri", "Sat-Sun"]);
}

#[test]
fn list_items_get_bullets() {
    assert_eq!(
        render("- Pizza\n- Pasta", 40),
        vec!["• Pizza", "• Pasta"]
    );
}

#[test]
fn ordered_list_items_get_bullets_too() {
    assert_eq!(render("1. First\n2. Second", 40), vec!["• First", "• Second"]);
}

#[test]
fn blocks_are_separated_by_blank_line() {
    assert_eq!(
        render("# Hours\n\nWe open at 9.", 40),
        vec!["Hours", "", "We open at 9."]
    );
}

#[test]
fn code_block_is_framed() {
    let lines = render("```\nopen()\n```", 20);
    assert!(lines[0].starts_with("┌─ code"));
    assert_eq!(lines[1], "│ open()");
    assert!(lines[2].starts_with('└'));
}

#[test]
fn quote_lines_are_prefixed() {
    assert_eq!(render("> Best pizza in town", 40), vec!["│ Best pizza in town"]);
}

#[test]
fn table_columns_are_aligned() {
    let lines = render("| Item | Price |\n|---|---|\n| Pizza | $10 |", 40);
    assert_eq!(lines[0], "Item  │ Price");
    assert_eq!(lines[1], "──────┼──────");
    assert_eq!(lines[2], "Pizza │ $10");
}

#[test]
fn rule_fills_width() {
    assert_eq!(render("---", 5), vec!["─────"]);
}

#[test]
fn menu_row_pushes_value_right() {
    let lines = menu_lines(&format_as_menu("Margherita: $10"), 20, Style::default());
    let text = plain(&lines[0]);
    assert!(text.starts_with("Margherita"));
    assert!(text.ends_with("$10"));
    assert_eq!(text.chars().count(), 20);
}

#[test]
fn menu_heading_after_rows_gets_spacing() {
    let lines = menu_lines(
        &format_as_menu("🍕 Pizza\nMargherita: $10\n🍝 Pasta"),
        30,
        Style::default(),
    );
    let text: Vec<String> = lines.iter().map(plain).collect();
    assert_eq!(text[0], "🍕 Pizza");
    assert_eq!(text[2], "");
    assert_eq!(text[3], "🍝 Pasta");
}

#[test]
fn menu_row_truncates_long_name() {
    let lines = menu_lines(
        &format_as_menu("A very long dish name indeed: $12"),
        16,
        Style::default(),
    );
    let text = plain(&lines[0]);
    assert!(text.contains('…'));
    assert!(text.ends_with("$12"));
}
