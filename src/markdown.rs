//! Markdown to HTML node conversion.
//!
//! A document is split into blank-line separated blocks, each block is
//! classified (heading, code, quote, list, paragraph) and rendered into an
//! [`HtmlNode`](crate::HtmlNode) container. Inline content runs through a
//! single-pass tokenizer for images, links, bold, italic and code.

mod blocks;
mod inline;
mod renderer;

pub use blocks::{BlockKind, classify, split_blocks};
pub use inline::{InlineSpan, to_html_nodes, tokenize};
pub use renderer::{convert, extract_title, render_block};
