//! Inline tokenizer.
//!
//! Splits a run of plain text into typed spans in a fixed stage order:
//! images, links, bold (`**`), italic (`*`), inline code (`` ` ``). Each stage
//! rewrites only spans still typed [`InlineSpan::Text`]; everything already
//! classified passes through untouched. Image extraction runs before links
//! because image syntax is link syntax with a `!` prefix, and bold runs
//! before italic so `**` is never read as two single stars.

use regex::Regex;
use std::sync::LazyLock;

use crate::html::HtmlNode;

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Classified run of inline markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl InlineSpan {
    /// Converts the span into an HTML leaf.
    ///
    /// Plain text becomes an untagged leaf. Images render as an `img` leaf
    /// with an empty value and `src` before `alt`.
    pub fn into_html(self) -> HtmlNode {
        match self {
            Self::Text(text) => HtmlNode::text(text),
            Self::Bold(text) => HtmlNode::leaf("b", text),
            Self::Italic(text) => HtmlNode::leaf("i", text),
            Self::Code(text) => HtmlNode::leaf("code", text),
            Self::Link { text, url } => HtmlNode::leaf("a", text).with_attr("href", url),
            Self::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
        }
    }
}

/// Tokenizes inline markdown into ordered spans.
///
/// Text without any markers yields exactly one [`InlineSpan::Text`] equal to
/// the input. An unmatched delimiter is kept as literal text.
///
/// # Examples
///
/// ```
/// use mdsite::{InlineSpan, tokenize};
///
/// let spans = tokenize("**b** and *i*");
/// assert_eq!(
///     spans,
///     vec![
///         InlineSpan::Bold("b".into()),
///         InlineSpan::Text(" and ".into()),
///         InlineSpan::Italic("i".into()),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    let spans = vec![InlineSpan::Text(text.to_string())];
    let spans = split_pattern(spans, &IMAGE_PATTERN, |alt, url| InlineSpan::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    });
    let spans = split_pattern(spans, &LINK_PATTERN, |text, url| InlineSpan::Link {
        text: text.to_string(),
        url: url.to_string(),
    });
    let spans = split_delimiter(spans, "**", InlineSpan::Bold);
    let spans = split_delimiter(spans, "*", InlineSpan::Italic);
    split_delimiter(spans, "`", InlineSpan::Code)
}

/// Tokenizes text and converts every span into an HTML leaf.
pub fn to_html_nodes(text: &str) -> Vec<HtmlNode> {
    tokenize(text)
        .into_iter()
        .map(InlineSpan::into_html)
        .collect()
}

/// Extracts every `pattern` match from text spans.
///
/// Matches come from a single left to right pass over the span; text
/// between and around matches is kept when non-empty.
fn split_pattern(
    spans: Vec<InlineSpan>,
    pattern: &Regex,
    make: fn(&str, &str) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut cursor = 0;
        let mut matched = false;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_text(&mut out, &text[cursor..whole.start()]);
            out.push(make(&caps[1], &caps[2]));
            cursor = whole.end();
            matched = true;
        }

        if matched {
            push_text(&mut out, &text[cursor..]);
        } else {
            out.push(InlineSpan::Text(text));
        }
    }

    out
}

/// Splits text spans on paired `delimiter` runs.
///
/// Each opening/closing pair produces one span built by `make`. Scanning
/// continues on the remainder, so one text span may yield several runs. A
/// trailing delimiter with no partner stays in the text literally.
///
/// Single character delimiters only match where they stand alone, so a
/// literal `**` left over from the bold stage is never read as an empty
/// italic pair.
fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    make: fn(String) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };
        if !text.contains(delimiter) {
            out.push(InlineSpan::Text(text));
            continue;
        }

        let mut rest = text.as_str();
        loop {
            let Some(open) = find_delimiter(rest, delimiter) else {
                push_text(&mut out, rest);
                break;
            };
            let inner_start = open + delimiter.len();
            let Some(len) = find_delimiter(&rest[inner_start..], delimiter) else {
                push_text(&mut out, rest);
                break;
            };

            push_text(&mut out, &rest[..open]);
            out.push(make(rest[inner_start..inner_start + len].to_string()));
            rest = &rest[inner_start + len + delimiter.len()..];
        }
    }

    out
}

/// Finds the first usable `delimiter` in `text`.
///
/// A single byte delimiter adjacent to another copy of itself belongs to a
/// longer run and is skipped.
fn find_delimiter(text: &str, delimiter: &str) -> Option<usize> {
    let [marker] = delimiter.as_bytes() else {
        return text.find(delimiter);
    };
    let bytes = text.as_bytes();

    text.match_indices(delimiter).map(|(i, _)| i).find(|&i| {
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        before != Some(*marker) && after != Some(*marker)
    })
}

fn push_text(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::Text(text.to_string()));
    }
}
