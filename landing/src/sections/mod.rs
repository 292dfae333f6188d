//! Landing page sections, one component per [`crate::content::SectionKind`].

mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod pricing;

pub use cta::CtaBanner;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::PricingSection;
