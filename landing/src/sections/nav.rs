use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::content::{NavContent, SectionKind};

/// Top bar: brand, in-page links, login and signup controls.
#[component]
pub fn Nav(content: NavContent) -> impl IntoView {
    let NavContent {
        brand,
        login_label,
        signup_label,
        links,
    } = content;

    view! {
        <nav class="nav" data-section=SectionKind::Nav.as_str()>
            <div class="container nav-inner">
                <span class="nav-brand">{brand}</span>
                <div class="nav-links">
                    {links.into_iter().map(|link| view! {
                        <a href=link.href class="nav-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                    <Button variant=ButtonVariant::Outline>{login_label}</Button>
                    <Button>{signup_label}</Button>
                </div>
            </div>
        </nav>
    }
}
