//! Page templates with `{{ Title }}` and `{{ Content }}` placeholders.

use anyhow::{Context, Result};
use maud::{DOCTYPE, PreEscaped, html};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Page template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wraps template text.
    ///
    /// A template without a content placeholder is accepted but logged,
    /// since every page rendered from it drops the converted markdown.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        if !source.contains(CONTENT_PLACEHOLDER) {
            warn!("Template has no {} placeholder", CONTENT_PLACEHOLDER);
        }
        Self { source }
    }

    /// Reads a template from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Ok(Self::new(source))
    }

    /// Minimal HTML5 page used when no template file is configured.
    pub fn builtin() -> Self {
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (PreEscaped(TITLE_PLACEHOLDER)) }
                    link rel="stylesheet" href="/index.css";
                }
                body {
                    article {
                        (PreEscaped(CONTENT_PLACEHOLDER))
                    }
                }
            }
        };
        Self::new(markup.into_string())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes every placeholder occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdsite::Template;
    ///
    /// let template = Template::new("<title>{{ Title }}</title>{{ Content }}");
    /// assert_eq!(
    ///     template.render("Home", "<div></div>"),
    ///     "<title>Home</title><div></div>"
    /// );
    /// ```
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::builtin()
    }
}
