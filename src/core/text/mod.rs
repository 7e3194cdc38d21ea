//! Text pipeline: cleans raw backend replies and turns them into displayable structure.

mod citations;
pub mod markdown;
mod menu;

pub use citations::{
    CitationFilter, extract_citations, strip_citations, strip_citations_strict,
};
pub use markdown::{BULLET, Block, Inline, render_markdown};
pub use menu::{DisplayBlock, format_as_menu, looks_like_menu};
