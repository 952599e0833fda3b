use anyhow::{Context, Result};
use mdsite::{Config, Template};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();

    // --verbose forces info, otherwise RUST_LOG decides (warnings by default)
    let filter = if config.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    config.validate().context("Invalid configuration")?;

    let copied = mdsite::copy_static(&config.static_dir, &config.output)
        .context("Failed to copy static assets")?;

    let template = match &config.template {
        Some(path) => Template::from_file(path)?,
        None => Template::builtin(),
    };

    let pages = mdsite::generate_pages(&config.content, &template, &config.output)
        .context("Failed to generate pages")?;

    println!(
        "Generated {} pages and copied {} static files into {}",
        pages,
        copied,
        config.output.display()
    );

    Ok(())
}
