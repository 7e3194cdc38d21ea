//! Markdown to a structured content tree.
//!
//! Parsing is CommonMark plus GFM tables and strikethrough. Two fixed rendering
//! rules apply to every reply:
//! - soft line breaks inside a paragraph are kept as hard breaks ([`Inline::LineBreak`]);
//! - list items carry no native marker; renderers prefix each one with [`BULLET`].
//!
//! Constructs the tree has no node for (raw HTML, images, footnote references) are
//! kept as literal text.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Glyph that prefixes every list item, ordered or not.
pub const BULLET: &str = "•";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link { url: String, children: Vec<Inline> },
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    BlockQuote(Vec<Block>),
    /// `start` is set for ordered lists. Items are rendered with [`BULLET`] either way.
    List {
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    Table {
        header: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    Rule,
}

/// Parse Markdown into blocks.
pub fn render_markdown(text: &str) -> Vec<Block> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(text, options) {
        builder.event(event);
    }
    builder.finish()
}

/// Nodes still being filled while walking the event stream.
enum Open {
    Root(Vec<Block>),
    BlockQuote(Vec<Block>),
    List {
        start: Option<u64>,
        items: Vec<Vec<Block>>,
    },
    Item(Vec<Block>),
    Paragraph(Vec<Inline>),
    Heading(u8, Vec<Inline>),
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    Table {
        header: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    TableHead(Vec<Vec<Inline>>),
    TableRow(Vec<Vec<Inline>>),
    TableCell(Vec<Inline>),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        url: String,
        children: Vec<Inline>,
    },
    Image {
        url: String,
        alt: Vec<Inline>,
    },
}

struct TreeBuilder {
    stack: Vec<Open>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Open::Root(Vec::new())],
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => {
                if is_tracked(&tag) {
                    self.close();
                }
            }
            Event::Text(t) => {
                if let Some(Open::CodeBlock { code, .. }) = self.stack.last_mut() {
                    code.push_str(&t);
                } else {
                    self.push_inline(Inline::Text(t.into_string()));
                }
            }
            Event::Code(t) => self.push_inline(Inline::Code(t.into_string())),
            Event::Html(t) | Event::InlineHtml(t) => self.push_literal(&t),
            Event::SoftBreak | Event::HardBreak => self.push_inline(Inline::LineBreak),
            Event::Rule => self.push_block(Block::Rule),
            Event::FootnoteReference(label) => {
                self.push_inline(Inline::Text(format!("[^{}]", label)))
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_inline(Inline::Text(marker.to_string()));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let node = match tag {
            Tag::Paragraph | Tag::HtmlBlock => Open::Paragraph(Vec::new()),
            Tag::Heading { level, .. } => Open::Heading(level as u8, Vec::new()),
            Tag::BlockQuote(_) => Open::BlockQuote(Vec::new()),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                Open::CodeBlock {
                    lang,
                    code: String::new(),
                }
            }
            Tag::List(start) => Open::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Open::Item(Vec::new()),
            Tag::Table(_) => Open::Table {
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => Open::TableHead(Vec::new()),
            Tag::TableRow => Open::TableRow(Vec::new()),
            Tag::TableCell => Open::TableCell(Vec::new()),
            Tag::Emphasis => Open::Emphasis(Vec::new()),
            Tag::Strong => Open::Strong(Vec::new()),
            Tag::Strikethrough => Open::Strikethrough(Vec::new()),
            Tag::Link { dest_url, .. } => Open::Link {
                url: dest_url.into_string(),
                children: Vec::new(),
            },
            Tag::Image { dest_url, .. } => Open::Image {
                url: dest_url.into_string(),
                alt: Vec::new(),
            },
            _ => return,
        };
        self.stack.push(node);
    }

    /// Pop the innermost open node and attach it to its parent.
    fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(node) = self.stack.pop() else { return };
        match node {
            Open::Root(_) => {}
            Open::Paragraph(content) => {
                let content = trim_breaks(content);
                if !content.is_empty() {
                    self.push_block(Block::Paragraph(content));
                }
            }
            Open::Heading(level, content) => self.push_block(Block::Heading { level, content }),
            Open::CodeBlock { lang, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.push_block(Block::CodeBlock { lang, code });
            }
            Open::BlockQuote(blocks) => self.push_block(Block::BlockQuote(blocks)),
            Open::List { start, items } => self.push_block(Block::List { start, items }),
            Open::Item(blocks) => {
                if let Some(Open::List { items, .. }) = self.stack.last_mut() {
                    items.push(blocks);
                }
            }
            Open::Table { header, rows } => self.push_block(Block::Table { header, rows }),
            Open::TableHead(cells) => {
                if let Some(Open::Table { header, .. }) = self.stack.last_mut() {
                    *header = cells;
                }
            }
            Open::TableRow(cells) => match self.stack.last_mut() {
                Some(Open::Table { rows, .. }) => rows.push(cells),
                Some(Open::TableHead(head)) => *head = cells,
                _ => {}
            },
            Open::TableCell(content) => {
                if let Some(Open::TableHead(cells) | Open::TableRow(cells)) = self.stack.last_mut()
                {
                    cells.push(content);
                }
            }
            Open::Strong(children) => self.push_inline(Inline::Strong(children)),
            Open::Emphasis(children) => self.push_inline(Inline::Emphasis(children)),
            Open::Strikethrough(children) => self.push_inline(Inline::Strikethrough(children)),
            Open::Link { url, children } => self.push_inline(Inline::Link { url, children }),
            Open::Image { url, alt } => {
                self.push_inline(Inline::Text(format!("![{}]({})", inline_text(&alt), url)))
            }
        }
    }

    fn push_block(&mut self, block: Block) {
        if let Some(Open::Root(blocks) | Open::BlockQuote(blocks) | Open::Item(blocks)) =
            self.stack.last_mut()
        {
            blocks.push(block);
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        let target = match self.stack.last_mut() {
            Some(
                Open::Paragraph(v)
                | Open::Heading(_, v)
                | Open::TableCell(v)
                | Open::Strong(v)
                | Open::Emphasis(v)
                | Open::Strikethrough(v)
                | Open::Link { children: v, .. }
                | Open::Image { alt: v, .. },
            ) => v,
            // Tight list items hold inline content without a paragraph.
            Some(Open::Root(blocks) | Open::BlockQuote(blocks) | Open::Item(blocks)) => {
                if !matches!(blocks.last(), Some(Block::Paragraph(_))) {
                    blocks.push(Block::Paragraph(Vec::new()));
                }
                match blocks.last_mut() {
                    Some(Block::Paragraph(v)) => v,
                    _ => return,
                }
            }
            Some(Open::CodeBlock { code, .. }) => {
                if let Inline::Text(t) = inline {
                    code.push_str(&t);
                }
                return;
            }
            _ => return,
        };
        match (target.last_mut(), inline) {
            (Some(Inline::Text(prev)), Inline::Text(next)) => prev.push_str(&next),
            (_, inline) => target.push(inline),
        }
    }

    /// Raw HTML is shown as typed; its own newlines become line breaks.
    fn push_literal(&mut self, raw: &str) {
        for piece in raw.split_inclusive('\n') {
            let text = piece.trim_end_matches('\n');
            if !text.is_empty() {
                self.push_inline(Inline::Text(text.to_string()));
            }
            if piece.ends_with('\n') {
                self.push_inline(Inline::LineBreak);
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        while self.stack.len() > 1 {
            self.close();
        }
        match self.stack.pop() {
            Some(Open::Root(blocks)) => blocks,
            _ => Vec::new(),
        }
    }
}

fn is_tracked(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Paragraph
            | TagEnd::HtmlBlock
            | TagEnd::Heading(_)
            | TagEnd::BlockQuote(_)
            | TagEnd::CodeBlock
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::Table
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Link
            | TagEnd::Image
    )
}

fn trim_breaks(mut content: Vec<Inline>) -> Vec<Inline> {
    while matches!(content.last(), Some(Inline::LineBreak)) {
        content.pop();
    }
    content
}

/// Flatten inline content to its visible text.
pub fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) | Inline::Code(t) => out.push_str(t),
            Inline::Strong(c) | Inline::Emphasis(c) | Inline::Strikethrough(c) => {
                out.push_str(&inline_text(c))
            }
            Inline::Link { children, .. } => out.push_str(&inline_text(children)),
            Inline::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Render blocks as plain text for non-interactive output.
pub fn to_plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| block_lines(b).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_lines(block: &Block) -> Vec<String> {
    match block {
        Block::Paragraph(content) => plain_inline(content).lines().map(String::from).collect(),
        Block::Heading { content, .. } => vec![plain_inline(content)],
        Block::CodeBlock { code, .. } => code.lines().map(|l| format!("    {}", l)).collect(),
        Block::BlockQuote(inner) => children_lines(inner)
            .into_iter()
            .map(|l| format!("> {}", l).trim_end().to_string())
            .collect(),
        Block::List { items, .. } => items.iter().flat_map(|item| item_lines(item)).collect(),
        Block::Table { header, rows } => std::iter::once(header)
            .chain(rows)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.iter()
                    .map(|cell| plain_inline(cell))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect(),
        Block::Rule => vec!["---".to_string()],
    }
}

fn children_lines(blocks: &[Block]) -> Vec<String> {
    blocks.iter().flat_map(block_lines).collect()
}

fn item_lines(item: &[Block]) -> Vec<String> {
    let lines = children_lines(item);
    if lines.is_empty() {
        return vec![BULLET.to_string()];
    }
    lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                format!("{} {}", BULLET, l)
            } else {
                format!("  {}", l)
            }
        })
        .collect()
}

/// Like [`inline_text`], but links keep their target: `text (url)`.
fn plain_inline(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Link { url, children } => {
                let text = plain_inline(children);
                if text == *url || text.is_empty() {
                    out.push_str(url);
                } else {
                    out.push_str(&format!("{} ({})", text, url));
                }
            }
            Inline::Strong(c) | Inline::Emphasis(c) | Inline::Strikethrough(c) => {
                out.push_str(&plain_inline(c))
            }
            other => out.push_str(&inline_text(std::slice::from_ref(other))),
        }
    }
    out
}
