//! HTML node tree and string serialization.
//!
//! A tree is a strict forest of owned nodes: leaves carry a value, containers
//! carry ordered children. Neither attribute values nor leaf values are
//! escaped on output, so callers own the safety of what they put in.

use crate::error::{Error, Result};

/// Ordered attribute mapping.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Creates an empty attribute mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes attributes for an opening tag.
    ///
    /// Returns an empty string when there are no attributes, otherwise a
    /// leading space followed by space separated `key="value"` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsite::Attributes;
    ///
    /// let attrs: Attributes = [("href", "https://example.com"), ("target", "_blank")]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(attrs.to_html(), r#" href="https://example.com" target="_blank""#);
    /// ```
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Node holding a value and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    value: String,
    attrs: Attributes,
}

/// Node holding ordered children and no direct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: String,
    children: Vec<HtmlNode>,
    attrs: Attributes,
}

/// Element of an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(Leaf),
    Container(Container),
}

impl HtmlNode {
    /// Creates an untagged leaf that renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        })
    }

    /// Creates a tagged leaf.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        })
    }

    /// Creates a container with its children set.
    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Container(Container {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        })
    }

    /// Adds an attribute, replacing any existing value for the same key.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf(leaf) => leaf.attrs.insert(key, value),
            Self::Container(container) => container.attrs.insert(key, value),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag.as_deref(),
            Self::Container(container) => Some(&container.tag),
        }
    }

    /// Returns the leaf value, or `None` for containers.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.value),
            Self::Container(_) => None,
        }
    }

    /// Returns container children; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Container(container) => &container.children,
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => &leaf.attrs,
            Self::Container(container) => &container.attrs,
        }
    }

    /// Serializes the node and its descendants to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTag`] if any container or tagged leaf in the
    /// tree has an empty tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsite::HtmlNode;
    ///
    /// let node = HtmlNode::container(
    ///     "p",
    ///     vec![HtmlNode::leaf("b", "Bold"), HtmlNode::text("Normal")],
    /// );
    /// assert_eq!(node.to_html()?, "<p><b>Bold</b>Normal</p>");
    /// # Ok::<(), mdsite::Error>(())
    /// ```
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Self::Leaf(leaf) => match &leaf.tag {
                None => out.push_str(&leaf.value),
                Some(tag) if tag.is_empty() => return Err(Error::MissingTag),
                Some(tag) => {
                    push_open_tag(out, tag, &leaf.attrs);
                    out.push_str(&leaf.value);
                    push_close_tag(out, tag);
                }
            },
            Self::Container(container) => {
                if container.tag.is_empty() {
                    return Err(Error::MissingTag);
                }
                push_open_tag(out, &container.tag, &container.attrs);
                for child in &container.children {
                    child.write_html(out)?;
                }
                push_close_tag(out, &container.tag);
            }
        }
        Ok(())
    }
}

fn push_open_tag(out: &mut String, tag: &str, attrs: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attrs.to_html());
    out.push('>');
}

fn push_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Incremental construction of a container node.
///
/// Children must be set before [`ContainerBuilder::build`] succeeds. An
/// explicitly empty child list is valid and renders as an empty element.
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    tag: String,
    children: Option<Vec<HtmlNode>>,
    attrs: Attributes,
}

impl ContainerBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: None,
            attrs: Attributes::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Appends one child, marking children as set.
    pub fn child(mut self, child: HtmlNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replaces the child list, marking children as set.
    pub fn children(mut self, children: impl IntoIterator<Item = HtmlNode>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Finishes the container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTag`] for an empty tag and
    /// [`Error::MissingChildren`] when children were never set.
    pub fn build(self) -> Result<HtmlNode> {
        if self.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        let children = self
            .children
            .ok_or_else(|| Error::MissingChildren {
                tag: self.tag.clone(),
            })?;

        Ok(HtmlNode::Container(Container {
            tag: self.tag,
            children,
            attrs: self.attrs,
        }))
    }
}
