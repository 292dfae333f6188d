use leptos::prelude::*;

use crate::components::PricingTier;
use crate::content::{PricingContent, SectionKind};

/// Pricing grid; three columns from medium screens up.
#[component]
pub fn PricingSection(content: PricingContent) -> impl IntoView {
    let kind = SectionKind::Pricing;
    view! {
        <section id=kind.anchor() class="pricing" data-section=kind.as_str()>
            <div class="container">
                <h2 class="section-title">{content.heading}</h2>
                <div class="grid pricing-grid">
                    {content.plans.into_iter().map(|plan| view! {
                        <PricingTier
                            name=plan.name
                            price=plan.monthly_price
                            features=plan.features
                            is_popular=plan.is_popular
                        />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
