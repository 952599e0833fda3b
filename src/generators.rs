//! HTML page generators for markdown content.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::markdown::{convert, extract_title};
use crate::path::{html_destination, is_markdown};
use crate::template::Template;

/// Renders markdown text into a complete page.
///
/// Converts the document body to HTML, extracts the title from its first
/// line and substitutes both into the template.
///
/// # Errors
///
/// Returns error if the first line is not a level-1 heading or the node
/// tree fails to serialize
///
/// # Examples
///
/// ```
/// use mdsite::{Template, render_page};
///
/// let template = Template::new("<title>{{ Title }}</title>{{ Content }}");
/// let page = render_page("# Home\n\nWelcome", &template)?;
/// assert_eq!(page, "<title>Home</title><div><h1>Home</h1><p>Welcome</p></div>");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn render_page(markdown: &str, template: &Template) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = convert(markdown)?.to_html()?;
    Ok(template.render(&title, &content))
}

/// Generates one HTML page from a markdown file.
///
/// Parent directories of `dest` are created as needed.
///
/// # Arguments
///
/// * `source`: Markdown file to convert
/// * `template`: Page template
/// * `dest`: Output HTML file
///
/// # Errors
///
/// Returns error if:
/// - Source cannot be read
/// - Document has no level-1 title on its first line
/// - Destination cannot be written
pub fn generate_page(source: &Path, template: &Template, dest: &Path) -> Result<()> {
    info!(
        "Generating page from {} to {}",
        source.display(),
        dest.display()
    );

    let markdown = fs::read_to_string(source)
        .with_context(|| format!("Failed to read markdown: {}", source.display()))?;

    let page = render_page(&markdown, template)
        .with_context(|| format!("Failed to render page: {}", source.display()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("Failed to write page: {}", dest.display()))?;

    Ok(())
}

/// Generates pages for every markdown file under a content tree.
///
/// Walks `content_dir` recursively in sorted order and writes each `.md`
/// file to the mirrored `.html` path under `dest_dir`. Other files are
/// skipped.
///
/// # Returns
///
/// Number of pages written
///
/// # Errors
///
/// Returns error on the first page that fails to generate
pub fn generate_pages(content_dir: &Path, template: &Template, dest_dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", content_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        if !is_markdown(source) {
            debug!("Skipping non-markdown file: {}", source.display());
            continue;
        }

        let dest = html_destination(content_dir, source, dest_dir)?;
        generate_page(source, template, &dest)?;
        count += 1;
    }

    info!("Generated {} pages into {}", count, dest_dir.display());
    Ok(count)
}
