//! Page composition.

use leptos::prelude::*;

use crate::content::PageContent;
use crate::sections::{CtaBanner, FeaturesSection, Footer, Hero, Nav, PricingSection};

/// The full page body for the given content, sections in fixed order.
#[component]
pub fn LandingPage(content: PageContent) -> impl IntoView {
    let PageContent {
        nav,
        hero,
        features,
        pricing,
        cta,
        footer,
    } = content;

    view! {
        <div class="page">
            <Nav content=nav />
            <main>
                <Hero content=hero />
                <FeaturesSection content=features />
                <PricingSection content=pricing />
                <CtaBanner content=cta />
            </main>
            <Footer content=footer />
        </div>
    }
}

/// The SaasApp landing page with its built-in content. Takes no props.
#[component]
pub fn SaasLandingPage() -> impl IntoView {
    view! { <LandingPage content=PageContent::default() /> }
}
