//! Static site generator for Markdown content.

mod assets;
mod config;
mod error;
mod generators;
mod html;
mod markdown;
mod path;
mod template;

pub use assets::copy_static;
pub use config::Config;
pub use error::{Error, Result};
pub use generators::{generate_page, generate_pages, render_page};
pub use html::{Attributes, Container, ContainerBuilder, HtmlNode, Leaf};
pub use markdown::{
    BlockKind, InlineSpan, classify, convert, extract_title, render_block, split_blocks,
    to_html_nodes, tokenize,
};
pub use path::{html_destination, is_markdown};
pub use template::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, Template};
