//! SVG icon components using Phosphor Icons.
//!
//! The page only needs two glyphs: a check mark for feature rows and plan
//! features, and a forward arrow on the hero call-to-action. Both come from
//! the [Phosphor Icons](https://phosphoricons.com/) library (Regular weight).

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Named glyphs available to content and components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Check mark inside a circle ("success")
    #[default]
    CheckCircle,
    /// Right-pointing arrow ("forward")
    ArrowRight,
}

impl Glyph {
    /// SVG path data for the glyph.
    pub fn path(self) -> &'static str {
        match self {
            Glyph::CheckCircle => ICON_CHECK_CIRCLE,
            Glyph::ArrowRight => ICON_ARROW_RIGHT,
        }
    }

    /// Short name, emitted as `data-glyph`.
    pub fn name(self) -> &'static str {
        match self {
            Glyph::CheckCircle => "check-circle",
            Glyph::ArrowRight => "arrow-right",
        }
    }
}

/// Renders an inline SVG glyph.
///
/// # Props
///
/// * `glyph` - Which glyph to draw
/// * `size` - Icon size in pixels (default: 20)
/// * `class` - Colour/spacing classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::ArrowRight size=24 class="icon-accent" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = 20)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-glyph=glyph.name()
            aria-hidden="true"
        >
            <path d=glyph.path()></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Check mark in a circle (CheckCircle)
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Arrow pointing right (ArrowRight)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";
