use leptos::prelude::*;

use crate::components::{Button, ButtonSize, Glyph, Icon};
use crate::content::{HeroContent, SectionKind};

/// Heading, subheading and the primary call-to-action.
#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let HeroContent {
        heading,
        subheading,
        cta_label,
    } = content;

    view! {
        <section class="hero" data-section=SectionKind::Hero.as_str()>
            <div class="container text-center">
                <h1 class="hero-title">{heading}</h1>
                <p class="hero-description">{subheading}</p>
                <Button size=ButtonSize::Large class="hero-cta">
                    {cta_label}
                    <Icon glyph=Glyph::ArrowRight size=20 class="icon-trailing" />
                </Button>
            </div>
        </section>
    }
}
