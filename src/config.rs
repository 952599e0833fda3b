//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for mdsite.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdsite", version, about, long_about = None)]
pub struct Config {
    /// Markdown content directory
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Static asset directory mirrored into the output
    #[arg(short = 's', long = "static", default_value = "static")]
    pub static_dir: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "public")]
    pub output: PathBuf,

    /// Page template containing {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Enable info level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or an explicitly
    /// supplied template file is missing.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        if let Some(template) = &self.template
            && !template.is_file()
        {
            bail!("Template file does not exist: {}", template.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(content: PathBuf, template: Option<PathBuf>) -> Config {
        Config {
            content,
            static_dir: PathBuf::from("static"),
            output: PathBuf::from("public"),
            template,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_defaults() {
        // Arrange & Act
        let config = Config::try_parse_from(["mdsite"]).expect("Should parse defaults");

        // Assert
        assert_eq!(config.content, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.output, PathBuf::from("public"));
        assert!(config.template.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        // Arrange & Act
        let config = Config::try_parse_from([
            "mdsite",
            "docs",
            "--static",
            "assets",
            "-o",
            "site",
            "-t",
            "page.html",
            "-v",
        ])
        .expect("Should parse flags");

        // Assert
        assert_eq!(config.content, PathBuf::from("docs"));
        assert_eq!(config.static_dir, PathBuf::from("assets"));
        assert_eq!(config.output, PathBuf::from("site"));
        assert_eq!(config.template, Some(PathBuf::from("page.html")));
        assert!(config.verbose);
    }

    #[test]
    fn test_validate_existing_content() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path().to_path_buf(), None);

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing content directory should be valid");
    }

    #[test]
    fn test_validate_missing_content() {
        // Arrange
        let config = config_for(PathBuf::from("/nonexistent/mdsite/content"), None);

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
        assert!(
            format!("{:#}", result.unwrap_err()).contains("Content directory does not exist")
        );
    }

    #[test]
    fn test_validate_missing_template() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let config = config_for(
            dir.path().to_path_buf(),
            Some(dir.path().join("missing.html")),
        );

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing template should be rejected");
    }

    #[test]
    fn test_validate_existing_template() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.html");
        std::fs::write(&template, "{{ Content }}").unwrap();
        let config = config_for(dir.path().to_path_buf(), Some(template));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok());
    }
}
