//! Leptos UI components for rendering the landing page.
//!
//! Each component is a stateless `#[component]` function; all text arrives
//! through props, usually straight from [`crate::content`].
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage
//!     ├── Nav            (Button)
//!     ├── Hero           (Button, Icon)
//!     ├── FeaturesSection
//!     │   └── Feature × n (Icon)
//!     ├── PricingSection
//!     │   └── PricingTier × n (Card, Button, Icon)
//!     ├── CtaBanner      (Button)
//!     └── Footer
//! ```
//!
//! The sections live in [`crate::sections`]; this module holds the leaves
//! and the document shell.

mod document;
mod feature;
mod icons;
mod primitives;
mod pricing_tier;

pub use document::LandingDocument;
pub use feature::Feature;
pub use icons::*;
pub use primitives::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader};
pub use pricing_tier::{
    DEFAULT_CTA, POPULAR_BADGE, POPULAR_CTA, PRICE_PERIOD, PricingTier, format_price,
};
