//! # saas-landing
//!
//! Command-line front end for the `saas-landing` renderer.
//!
//! ```bash
//! # Built-in page to a file
//! saas-landing render --out index.html
//!
//! # Edited content, external stylesheet
//! saas-landing content --format toml > page.toml
//! saas-landing check page.toml
//! saas-landing render --content page.toml --stylesheet /landing.css
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use commands::{CheckArgs, ContentArgs, RenderArgs};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "saas-landing")]
#[command(about = "Render the SaasApp landing page to static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to a file or stdout
    Render(RenderArgs),
    /// Print the built-in content table
    Content(ContentArgs),
    /// Load and validate a content file
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("saas-landing v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Render(args) => commands::render(args),
        Command::Content(args) => commands::content(args),
        Command::Check(args) => commands::check(args),
    }
}
