//! Text layout for the chat display: wrapping, Markdown lines, menu rows.

mod markdown;
mod menu;
mod wrap;

pub(crate) use markdown::markdown_lines;
pub(crate) use menu::menu_lines;
pub(crate) use wrap::wrap_message;

#[cfg(test)]
mod tests;
