//! Block rendering and document assembly.

use regex::Regex;
use std::sync::LazyLock;

use super::blocks::{BlockKind, classify, split_blocks};
use super::inline::to_html_nodes;
use crate::error::{Error, Result};
use crate::html::{ContainerBuilder, HtmlNode};

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[*-]|\d\.)\s").unwrap());

const CODE_FENCE: &str = "```";

/// Converts a markdown document into a single `div` container.
///
/// Blocks are rendered in source order, one child per block.
///
/// # Errors
///
/// Returns error if a rendered block fails node construction.
///
/// # Examples
///
/// ```
/// let node = mdsite::convert("# Title\n\nSome **bold** text.")?;
/// assert_eq!(
///     node.to_html()?,
///     "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
/// );
/// # Ok::<(), mdsite::Error>(())
/// ```
pub fn convert(markdown: &str) -> Result<HtmlNode> {
    let children = split_blocks(markdown)
        .into_iter()
        .map(|block| render_block(block, classify(block)))
        .collect::<Result<Vec<_>>>()?;

    ContainerBuilder::new("div").children(children).build()
}

/// Returns the title from a document's first line.
///
/// The first line must be a level-1 heading (`#` followed by whitespace);
/// the heading text is returned trimmed.
///
/// # Errors
///
/// Returns [`Error::NoTitleFound`] if the first line is not a level-1
/// heading or the heading is empty.
pub fn extract_title(markdown: &str) -> Result<String> {
    let first_line = markdown.lines().next().unwrap_or("");
    let rest = first_line.strip_prefix('#').ok_or(Error::NoTitleFound)?;

    if !rest.starts_with(char::is_whitespace) {
        return Err(Error::NoTitleFound);
    }

    let title = rest.trim();
    if title.is_empty() {
        return Err(Error::NoTitleFound);
    }
    Ok(title.to_string())
}

/// Renders one classified block.
///
/// # Errors
///
/// Returns error if the produced container cannot be built.
pub fn render_block(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Paragraph => render_paragraph(block),
        BlockKind::Heading(level) => render_heading(block, level),
        BlockKind::Code => render_code(block),
        BlockKind::Quote => render_quote(block),
        BlockKind::UnorderedList => render_list(block, "ul"),
        BlockKind::OrderedList => render_list(block, "ol"),
    }
}

fn render_paragraph(block: &str) -> Result<HtmlNode> {
    ContainerBuilder::new("p")
        .children(to_html_nodes(block))
        .build()
}

fn render_heading(block: &str, level: u8) -> Result<HtmlNode> {
    let text = block.trim_start_matches('#').trim_start();

    ContainerBuilder::new(format!("h{}", level))
        .children(to_html_nodes(text))
        .build()
}

/// Code content is a single literal leaf; no inline markup applies.
fn render_code(block: &str) -> Result<HtmlNode> {
    let code = block.replace(CODE_FENCE, "");

    ContainerBuilder::new("pre")
        .child(HtmlNode::leaf("code", code.trim()))
        .build()
}

/// Each quoted line becomes its own `p` holding the literal line text.
fn render_quote(block: &str) -> Result<HtmlNode> {
    let lines = block.split('\n').map(|line| {
        let text = line.strip_prefix('>').unwrap_or(line).trim_start();
        HtmlNode::leaf("p", text)
    });

    ContainerBuilder::new("blockquote").children(lines).build()
}

fn render_list(block: &str, tag: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = LIST_MARKER.replace(line, "");
            ContainerBuilder::new("li")
                .children(to_html_nodes(&text))
                .build()
        })
        .collect::<Result<Vec<_>>>()?;

    ContainerBuilder::new(tag).children(items).build()
}
