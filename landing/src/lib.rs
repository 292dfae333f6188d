//! # saas-landing
//!
//! Leptos SSR renderer for the SaasApp marketing landing page.
//!
//! The page is a fixed composition of six sections (navigation, hero,
//! features, pricing, call-to-action, footer) built from two display
//! components, [`Feature`](components::Feature) and
//! [`PricingTier`](components::PricingTier), plus style-only primitives. All
//! text comes from a declarative content table, [`content::PageContent`].
//!
//! ## Quick Start
//!
//! ```rust
//! use saas_landing::render_landing_page;
//!
//! let html = render_landing_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Simple, Transparent Pricing"));
//! ```
//!
//! Custom content goes through [`render_document`]:
//!
//! ```rust
//! use saas_landing::{render_document, RenderOptions, content::PageContent};
//!
//! let mut content = PageContent::default();
//! content.nav.brand = "Acme".into();
//! content.validate().expect("valid content");
//!
//! let html = render_document(&content, &RenderOptions::default());
//! assert!(html.contains("Acme"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - content records and the built-in page
//! - [`components`] - leaf components, primitives and the document shell
//! - [`sections`] - one component per page section
//! - [`page`] - the page root
//! - [`styles`] - CSS constants
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod page;
pub mod sections;
pub mod styles;
#[doc(hidden)]
pub mod testing;

use components::LandingDocument;
use content::PageContent;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use page::LandingPage;

/// Default `<title>` of the rendered document.
pub const DEFAULT_TITLE: &str = "SaasApp - Streamline Your Workflow";

/// Where the page's CSS comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Stylesheet {
    /// Embed [`styles::LANDING_CSS`] in a `<style>` element
    #[default]
    Inline,
    /// Reference an external stylesheet by URL
    Link(String),
}

/// Document-level settings that are not part of the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text of the `<title>` element
    pub title: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// CSS source
    pub stylesheet: Stylesheet,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            lang: "en".into(),
            stylesheet: Stylesheet::Inline,
        }
    }
}

/// Render the built-in landing page as a complete HTML document.
///
/// Equivalent to `render_document(&PageContent::default(), &RenderOptions::default())`.
pub fn render_landing_page() -> String {
    render_document(&PageContent::default(), &RenderOptions::default())
}

/// Render a complete HTML document for the given content.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
/// The output depends only on the arguments.
pub fn render_document(content: &PageContent, options: &RenderOptions) -> String {
    tracing::debug!(
        features = content.features.items.len(),
        plans = content.pricing.plans.len(),
        "rendering landing document"
    );

    let doc = view! {
        <LandingDocument content=content.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page markup, without `<html>`, `<head>` or styles.
///
/// Useful for embedding the page into another document.
pub fn render_fragment(content: &PageContent) -> String {
    view! { <LandingPage content=content.clone() /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_complete_document() {
        let html = render_landing_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(".pricing-grid"));
    }

    #[test]
    fn linked_stylesheet_replaces_inline_css() {
        let options = RenderOptions {
            stylesheet: Stylesheet::Link("/assets/landing.css".into()),
            ..Default::default()
        };
        let html = render_document(&PageContent::default(), &options);

        assert!(html.contains("href=\"/assets/landing.css\""));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn title_and_lang_come_from_options() {
        let options = RenderOptions {
            title: "Pricing that scales".into(),
            lang: "en-GB".into(),
            ..Default::default()
        };
        let html = render_document(&PageContent::default(), &options);

        assert!(html.contains("<title>Pricing that scales</title>"));
        assert!(html.contains("lang=\"en-GB\""));
    }

    #[test]
    fn fragment_has_no_document_shell() {
        let html = render_fragment(&PageContent::default());

        assert!(!html.contains("<html"));
        assert!(!html.contains("<head"));
        assert!(html.contains("Powerful Features"));
    }

    #[test]
    fn renders_custom_content() {
        let mut content = PageContent::default();
        content.hero.heading = "Ship faster".into();
        content.pricing.plans.truncate(1);

        let html = render_fragment(&content);
        assert!(html.contains("Ship faster"));
        assert_eq!(html.matches("class=\"card pricing-tier").count(), 1);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_landing_page(), render_landing_page());
    }
}
