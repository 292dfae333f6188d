//! Style-only UI primitives: `Button` and `Card`.
//!
//! These carry no behaviour. They map a variant/size pair or a sub-region to
//! a set of CSS classes from [`crate::styles::LANDING_CSS`] and render their
//! children inside.

use leptos::prelude::*;

/// Visual treatment of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid accent background
    #[default]
    Default,
    /// Transparent with an accent border
    Outline,
    /// Light background, used on accent-coloured banners
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

/// Size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Regular padding and font size
    #[default]
    Default,
    /// Hero and banner calls-to-action
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Joins a base class with optional extra classes.
fn classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Full class list for a button.
pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    classes(&format!("btn {} {}", variant.class(), size.class()), extra)
}

/// A clickable control. Purely presentational; no handlers are attached.
#[component]
pub fn Button(
    /// Visual treatment
    #[prop(optional)]
    variant: ButtonVariant,
    /// Padding / font size
    #[prop(optional)]
    size: ButtonSize,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, &class)>
            {children()}
        </button>
    }
}

/// Bordered container with header, content and footer regions.
#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=classes("card", &class)>{children()}</div> }
}

/// Top region of a [`Card`].
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

/// Main region of a [`Card`].
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

/// Bottom region of a [`Card`]; pushed to the bottom of equal-height cards.
#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="card-footer">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn button_classes_follow_variant_and_size() {
        assert_eq!(
            button_class(ButtonVariant::Default, ButtonSize::Default, ""),
            "btn btn-default btn-md"
        );
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Large, "wide"),
            "btn btn-outline btn-lg wide"
        );
    }

    #[test]
    fn button_renders_children() {
        let html = view! { <Button variant=ButtonVariant::Secondary>"Go"</Button> }.to_html();
        assert!(html.contains("<button"));
        assert!(html.contains("btn-secondary"));
        assert!(html.contains("Go"));
    }

    #[test]
    fn card_regions_nest_in_order() {
        let html = view! {
            <Card class="extra">
                <CardHeader>"head"</CardHeader>
                <CardContent>"body"</CardContent>
                <CardFooter>"foot"</CardFooter>
            </Card>
        }
        .to_html();

        assert!(html.contains("<div class=\"card extra\">"));
        let head = html.find("card-header").unwrap();
        let body = html.find("card-content").unwrap();
        let foot = html.find("card-footer").unwrap();
        assert!(head < body && body < foot);
    }
}
