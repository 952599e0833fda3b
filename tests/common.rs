//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out a temporary site: content tree, static
//! assets and a page template.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template used by site fixtures.
pub const TEMPLATE: &str =
    "<!DOCTYPE html><html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

/// Temporary site layout rooted in a scratch directory.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn content(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.dir.path().join("static")
    }

    pub fn public(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    pub fn template(&self) -> PathBuf {
        self.dir.path().join("template.html")
    }
}

/// Creates a temporary site with content, static assets and a template.
///
/// Layout:
/// - `content/index.md`, `content/blog/first.md`
/// - `static/index.css`, `static/images/logo.bin`
/// - `template.html`
///
/// # Errors
///
/// Returns error if any fixture file cannot be written
pub fn create_test_site() -> Result<TestSite> {
    let site = TestSite {
        dir: TempDir::new()?,
    };

    write_file(
        &site.content(),
        "index.md",
        "# Welcome\n\nThis is **my** site.\n\n* [Blog](/blog/first.html)\n* ![logo](/images/logo.bin)\n",
    )?;
    write_file(
        &site.content(),
        "blog/first.md",
        "# First Post\n\n> quoted **as is**\n\n```\nlet x = 1;\n```\n\n1. one\n2. `two`\n",
    )?;
    write_file(&site.static_dir(), "index.css", "body { margin: 0; }")?;
    write_bytes(&site.static_dir(), "images/logo.bin", &[0, 1, 2, 254, 255])?;
    std::fs::write(site.template(), TEMPLATE)?;

    Ok(site)
}

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    write_bytes(root, path, content.as_bytes())
}

/// Writes raw bytes under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_bytes(root: &Path, path: &str, content: &[u8]) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
