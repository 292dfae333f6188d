//! Pricing tier card.

use leptos::prelude::*;

use super::{Button, Card, CardContent, CardFooter, CardHeader, Glyph, Icon};

/// Badge text on the highlighted tier.
pub const POPULAR_BADGE: &str = "Most Popular";
/// Call-to-action label on the highlighted tier.
pub const POPULAR_CTA: &str = "Start Free Trial";
/// Call-to-action label on every other tier.
pub const DEFAULT_CTA: &str = "Choose Plan";
/// Suffix printed right after the price.
pub const PRICE_PERIOD: &str = "/mo";

/// Formats a whole-unit monthly price, e.g. `29` -> `$29`.
pub fn format_price(price: u32) -> String {
    format!("${price}")
}

/// One plan: name, monthly price, feature list and a call-to-action.
///
/// When `is_popular` is set the card gets the highlighted border, the
/// "Most Popular" badge and the trial call-to-action. Features are listed in
/// the order given.
#[component]
pub fn PricingTier(
    /// Plan name
    #[prop(into)]
    name: String,
    /// Whole currency units per month
    price: u32,
    /// Included features, in display order
    features: Vec<String>,
    /// Highlight this tier
    #[prop(optional)]
    is_popular: bool,
) -> impl IntoView {
    let card_class = if is_popular {
        "pricing-tier pricing-tier-popular"
    } else {
        "pricing-tier"
    };
    let cta_label = if is_popular { POPULAR_CTA } else { DEFAULT_CTA };

    view! {
        <Card class=card_class>
            <CardHeader>
                <h3 class="tier-name">{name}</h3>
                {is_popular.then(|| view! { <span class="badge">{POPULAR_BADGE}</span> })}
            </CardHeader>
            <CardContent>
                <p class="tier-price">
                    {format_price(price)}
                    <span class="tier-period">{PRICE_PERIOD}</span>
                </p>
                <ul class="tier-features">
                    {features.into_iter().map(|feature| view! {
                        <li class="tier-feature">
                            <Icon glyph=Glyph::CheckCircle size=20 class="icon-success" />
                            {feature}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </CardContent>
            <CardFooter>
                <Button class="btn-block">{cta_label}</Button>
            </CardFooter>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{items_in, visible_text};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lists_features_in_input_order() {
        let features = strings(&["Up to 20 users", "Advanced features", "10GB storage"]);
        let html = view! { <PricingTier name="Pro" price=29 features=features.clone() /> }.to_html();

        assert_eq!(items_in(&html, "tier-feature"), features);
    }

    #[test]
    fn popular_tier_has_badge_and_trial_cta() {
        let html = view! {
            <PricingTier name="Pro" price=29 features=strings(&["API access"]) is_popular=true />
        }
        .to_html();
        let text = visible_text(&html);

        assert!(text.contains(POPULAR_BADGE));
        assert!(text.contains(POPULAR_CTA));
        assert!(!text.contains(DEFAULT_CTA));
        assert!(html.contains("pricing-tier-popular"));
    }

    #[test]
    fn regular_tier_has_no_badge() {
        let html = view! {
            <PricingTier name="Basic" price=9 features=strings(&["Email support"]) />
        }
        .to_html();
        let text = visible_text(&html);

        assert!(!text.contains(POPULAR_BADGE));
        assert!(text.contains(DEFAULT_CTA));
        assert!(!text.contains(POPULAR_CTA));
        assert!(!html.contains("pricing-tier-popular"));
    }

    #[test]
    fn price_is_followed_by_period() {
        let html = view! {
            <PricingTier name="Pro" price=29 features=strings(&["API access"]) />
        }
        .to_html();

        assert!(visible_text(&html).contains("$29/mo"));
    }

    #[test]
    fn zero_price_renders() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(99), "$99");
    }

    #[test]
    fn each_feature_gets_a_check_glyph() {
        let html = view! {
            <PricingTier name="Enterprise" price=99 features=strings(&["a", "b", "c", "d"]) />
        }
        .to_html();

        assert_eq!(html.matches("data-glyph=\"check-circle\"").count(), 4);
    }
}
