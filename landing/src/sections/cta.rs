use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::content::{CtaContent, SectionKind};

/// Closing banner; light button on the accent background.
#[component]
pub fn CtaBanner(content: CtaContent) -> impl IntoView {
    let CtaContent {
        heading,
        subheading,
        cta_label,
    } = content;

    view! {
        <section class="cta" data-section=SectionKind::Cta.as_str()>
            <div class="container text-center">
                <h2 class="cta-title">{heading}</h2>
                <p class="cta-description">{subheading}</p>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Large>
                    {cta_label}
                </Button>
            </div>
        </section>
    }
}
