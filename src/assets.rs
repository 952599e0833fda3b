//! Static asset mirroring

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Mirrors a static asset tree into a freshly emptied output directory.
///
/// Any existing `output_dir` is removed first. Every regular file under
/// `static_dir` is copied byte for byte to the same relative location. A
/// missing `static_dir` copies nothing but still leaves an empty output
/// directory behind.
///
/// # Returns
///
/// Number of files copied
///
/// # Errors
///
/// Returns error if the output directory cannot be reset or a file cannot
/// be copied
pub fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).with_context(|| {
            format!("Failed to clear output directory: {}", output_dir.display())
        })?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    if !static_dir.is_dir() {
        warn!("Static directory not found, skipping: {}", static_dir.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", static_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        let relative = source
            .strip_prefix(static_dir)
            .with_context(|| format!("Unexpected path outside static dir: {}", source.display()))?;
        let dest = output_dir.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::copy(source, &dest)
            .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;

        debug!("Copied {} -> {}", source.display(), dest.display());
        copied += 1;
    }

    info!("Copied {} static files into {}", copied, output_dir.display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_static_mirrors_tree() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        let output_dir = dir.path().join("public");
        fs::create_dir_all(static_dir.join("images/icons")).unwrap();
        fs::write(static_dir.join("index.css"), "body {}").unwrap();
        fs::write(static_dir.join("images/icons/logo.png"), [0u8, 159, 146, 150]).unwrap();

        // Act
        let copied = copy_static(&static_dir, &output_dir).unwrap();

        // Assert
        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(output_dir.join("index.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            fs::read(output_dir.join("images/icons/logo.png")).unwrap(),
            vec![0u8, 159, 146, 150]
        );
    }

    #[test]
    fn test_copy_static_clears_stale_output() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        let output_dir = dir.path().join("public");
        fs::create_dir_all(&static_dir).unwrap();
        fs::create_dir_all(&output_dir).unwrap();
        fs::write(output_dir.join("stale.html"), "old").unwrap();

        // Act
        let copied = copy_static(&static_dir, &output_dir).unwrap();

        // Assert
        assert_eq!(copied, 0);
        assert!(output_dir.is_dir());
        assert!(!output_dir.join("stale.html").exists());
    }

    #[test]
    fn test_copy_static_missing_source() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("public");

        // Act
        let copied = copy_static(&dir.path().join("nope"), &output_dir).unwrap();

        // Assert
        assert_eq!(copied, 0);
        assert!(output_dir.is_dir(), "Output directory should still exist");
    }
}
