//! Configuration file support.
//!
//! Loads an optional `landing.toml`. Every key is optional; command-line
//! flags win over the file.

use std::path::{Path, PathBuf};

use saas_landing::{RenderOptions, Stylesheet};
use serde::Deserialize;
use tracing::warn;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "landing.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LandingConfig {
    /// Document `<title>`
    pub title: Option<String>,
    /// `lang` attribute of `<html>`
    pub lang: Option<String>,
    /// External stylesheet URL; the CSS is inlined when unset
    pub stylesheet: Option<String>,
    /// Content file (`.json` / `.toml`), relative to the config file
    pub content: Option<PathBuf>,
}

impl LandingConfig {
    /// Load `landing.toml` from the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if let (Some(content), Some(base)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = base.join(&*content);
            }
        }
        config
    }

    /// Overlay the configured values onto render options.
    pub fn apply(&self, options: &mut RenderOptions) {
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(lang) = &self.lang {
            options.lang = lang.clone();
        }
        if let Some(href) = &self.stylesheet {
            options.stylesheet = Stylesheet::Link(href.clone());
        }
    }
}
