//! Feature row - icon beside a heading and a line of body text.

use leptos::prelude::*;

use super::{Glyph, Icon};

/// One entry of the feature grid.
///
/// Pure function of its three inputs; the same props always render the same
/// markup.
#[component]
pub fn Feature(
    /// Heading text
    #[prop(into)]
    title: String,
    /// Body text
    #[prop(into)]
    description: String,
    /// Glyph shown to the left of the text
    #[prop(optional)]
    icon: Glyph,
) -> impl IntoView {
    view! {
        <div class="feature">
            <Icon glyph=icon size=24 class="feature-icon" />
            <div class="feature-body">
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::visible_text;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_title_and_description_once() {
        let html = view! {
            <Feature title="Task Management" description="Organize and prioritize your tasks with ease." />
        }
        .to_html();

        let text = visible_text(&html);
        assert_eq!(text.matches("Task Management").count(), 1);
        assert_eq!(
            text.matches("Organize and prioritize your tasks with ease.").count(),
            1
        );
        assert!(html.contains("<h3 class=\"feature-title\">"));
    }

    #[test]
    fn icon_defaults_to_check_mark() {
        let html = view! { <Feature title="A" description="B" /> }.to_html();
        assert!(html.contains("data-glyph=\"check-circle\""));

        let html = view! { <Feature title="A" description="B" icon=Glyph::ArrowRight /> }.to_html();
        assert!(html.contains("data-glyph=\"arrow-right\""));
    }

    #[test]
    fn rendering_is_idempotent() {
        let render = || view! { <Feature title="Integrations" description="Connect." /> }.to_html();
        assert_eq!(render(), render());
    }
}
