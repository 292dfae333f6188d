use leptos::prelude::*;

use crate::components::Feature;
use crate::content::{FeaturesContent, SectionKind};

/// Feature grid: one column on narrow screens, two on medium, three on wide.
#[component]
pub fn FeaturesSection(content: FeaturesContent) -> impl IntoView {
    let kind = SectionKind::Features;
    view! {
        <section id=kind.anchor() class="features" data-section=kind.as_str()>
            <div class="container">
                <h2 class="section-title">{content.heading}</h2>
                <div class="grid features-grid">
                    {content.items.into_iter().map(|item| view! {
                        <Feature title=item.title description=item.description icon=item.icon />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
