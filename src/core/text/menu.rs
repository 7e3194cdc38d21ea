//! Heuristic menu formatting: emoji lines become headings, `name: price` lines become rows.

/// One display line of a menu-formatted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Heading(String),
    MenuRow { name: String, value: String },
    Paragraph(String),
}

/// True for characters in the common pictograph, misc symbol and dingbat ranges.
/// Approximate: not every emoji is covered and some covered symbols are not emoji.
pub fn is_emoji(c: char) -> bool {
    matches!(c, '\u{1F300}'..='\u{1F9FF}' | '\u{2600}'..='\u{26FF}' | '\u{2700}'..='\u{27BF}')
}

fn has_emoji(s: &str) -> bool {
    s.chars().any(is_emoji)
}

/// Advisory check: does the text look like menu data (emoji or colons)?
pub fn looks_like_menu(text: &str) -> bool {
    has_emoji(text) || text.contains(':')
}

/// Classify each non-blank line on its own, preserving order.
pub fn format_as_menu(text: &str) -> Vec<DisplayBlock> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> DisplayBlock {
    if has_emoji(line) {
        return DisplayBlock::Heading(line.to_string());
    }
    if let Some((name, value)) = line.split_once(':') {
        return DisplayBlock::MenuRow {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        };
    }
    DisplayBlock::Paragraph(line.to_string())
}
