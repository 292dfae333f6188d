//! Subcommand implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use saas_landing::content::PageContent;
use saas_landing::{RenderOptions, Stylesheet, render_document, render_fragment};
use tracing::info;

use crate::config::LandingConfig;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Content file (.json or .toml) replacing the built-in content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Config file (defaults to ./landing.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Link this stylesheet instead of inlining the CSS
    #[arg(long)]
    stylesheet: Option<String>,

    /// Emit only the page markup, without <html>/<head>; document settings
    /// from landing.toml (title, lang, stylesheet) do not apply
    #[arg(long, conflicts_with_all = ["title", "stylesheet"])]
    fragment: bool,
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ContentFormat::Json)]
    format: ContentFormat,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Content file to validate (.json or .toml)
    path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContentFormat {
    Json,
    Toml,
}

/// Load a content file and run the validation checks on it.
fn load_content(path: &Path) -> Result<PageContent> {
    let content = PageContent::load(path)
        .with_context(|| format!("Failed to load content from {}", path.display()))?;
    content
        .validate()
        .with_context(|| format!("Invalid content in {}", path.display()))?;
    Ok(content)
}

pub fn render(args: RenderArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file {} not found", path.display());
            LandingConfig::load_from_path(path)
        }
        None => LandingConfig::load(Path::new(".")),
    };

    let mut options = RenderOptions::default();
    config.apply(&mut options);
    if let Some(title) = args.title {
        options.title = title;
    }
    if let Some(href) = args.stylesheet {
        options.stylesheet = Stylesheet::Link(href);
    }

    let content = match args.content.as_ref().or(config.content.as_ref()) {
        Some(path) => {
            info!("Using content from {}", path.display());
            load_content(path)?
        }
        None => PageContent::default(),
    };

    let html = if args.fragment {
        render_fragment(&content)
    } else {
        render_document(&content, &options)
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

pub fn content(args: ContentArgs) -> Result<()> {
    let content = PageContent::default();
    let serialized = match args.format {
        ContentFormat::Json => serde_json::to_string_pretty(&content)?,
        ContentFormat::Toml => toml::to_string_pretty(&content)?,
    };
    println!("{serialized}");
    Ok(())
}

pub fn check(args: CheckArgs) -> Result<()> {
    let content = load_content(&args.path)?;
    let popular = content
        .popular_plan()
        .map_or("none", |plan| plan.name.as_str());
    println!(
        "ok: {} features, {} plans (popular: {})",
        content.features.items.len(),
        content.pricing.plans.len(),
        popular
    );
    Ok(())
}
