//! Block splitting and classification.

use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());

static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\A```.+```\z").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*-]\s").unwrap());

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\.\s").unwrap());

/// Structural kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Splits a document into blocks separated by blank lines.
///
/// A blank line may contain whitespace; consecutive blank lines count as one
/// separator. Blocks are trimmed and empty blocks dropped. Newlines inside a
/// block are preserved.
///
/// # Examples
///
/// ```
/// use mdsite::split_blocks;
///
/// let blocks = split_blocks("# Title\n\n\n  \nline one\nline two\n");
/// assert_eq!(blocks, vec!["# Title", "line one\nline two"]);
/// ```
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    BLANK_LINES
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies a block; the first matching kind wins.
///
/// Precedence: heading (first line only), fenced code (whole block), quote,
/// unordered list, ordered list (every line), paragraph.
pub fn classify(block: &str) -> BlockKind {
    if HEADING.is_match(block) {
        BlockKind::Heading(heading_level(block))
    } else if CODE.is_match(block) {
        BlockKind::Code
    } else if all_lines(block, |line| line.starts_with('>')) {
        BlockKind::Quote
    } else if all_lines(block, |line| UNORDERED_ITEM.is_match(line)) {
        BlockKind::UnorderedList
    } else if all_lines(block, |line| ORDERED_ITEM.is_match(line)) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Counts leading `#` characters.
pub(crate) fn heading_level(block: &str) -> u8 {
    block.bytes().take_while(|&b| b == b'#').take(6).count() as u8
}

fn all_lines(block: &str, predicate: impl Fn(&str) -> bool) -> bool {
    block.split('\n').all(predicate)
}
