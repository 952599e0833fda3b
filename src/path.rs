//! Path utilities for page generation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns true if the path has a `.md` extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Maps a markdown source file to its HTML destination.
///
/// The source's location relative to `content_root` is mirrored under
/// `dest_root` with the extension replaced by `html`.
///
/// # Arguments
///
/// * `content_root`: Root of the markdown content tree
/// * `source`: Markdown file inside `content_root`
/// * `dest_root`: Root of the generated site
///
/// # Errors
///
/// Returns error if `source` is not inside `content_root`
pub fn html_destination(content_root: &Path, source: &Path, dest_root: &Path) -> Result<PathBuf> {
    let relative = source.strip_prefix(content_root).with_context(|| {
        format!(
            "{} is not inside {}",
            source.display(),
            content_root.display()
        )
    })?;

    Ok(dest_root.join(relative).with_extension("html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("index.md")));
        assert!(is_markdown(Path::new("blog/post.md")));
        assert!(!is_markdown(Path::new("notes.markdown")));
        assert!(!is_markdown(Path::new("image.png")));
        assert!(!is_markdown(Path::new("README")));
    }

    #[test]
    fn test_destination_root_file() {
        let dest = html_destination(
            Path::new("content"),
            Path::new("content/index.md"),
            Path::new("public"),
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("public/index.html"));
    }

    #[test]
    fn test_destination_nested_file() {
        let dest = html_destination(
            Path::new("content"),
            Path::new("content/blog/2024/post.md"),
            Path::new("public"),
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("public/blog/2024/post.html"));
    }

    #[test]
    fn test_destination_only_replaces_extension() {
        let dest = html_destination(
            Path::new("content"),
            Path::new("content/my.md.notes/page.md"),
            Path::new("public"),
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("public/my.md.notes/page.html"));
    }

    #[test]
    fn test_destination_outside_root() {
        let result = html_destination(
            Path::new("content"),
            Path::new("elsewhere/page.md"),
            Path::new("public"),
        );

        assert!(result.is_err());
    }
}
