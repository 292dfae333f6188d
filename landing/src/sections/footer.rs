use leptos::prelude::*;

use crate::content::{FooterContent, LinkGroup, SectionKind};

/// Link groups followed by the copyright line.
#[component]
pub fn Footer(content: FooterContent) -> impl IntoView {
    let FooterContent { copyright, groups } = content;

    view! {
        <footer class="footer" data-section=SectionKind::Footer.as_str()>
            <div class="container">
                <div class="grid footer-grid">
                    {groups.into_iter().map(|group| view! { <FooterGroup group=group /> }).collect::<Vec<_>>()}
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterGroup(group: LinkGroup) -> impl IntoView {
    view! {
        <div class="footer-group">
            <h3 class="footer-group-title">{group.title}</h3>
            <ul class="footer-links">
                {group.links.into_iter().map(|link| view! {
                    <li class="footer-link-item">
                        <a href=link.href class="footer-link">{link.label}</a>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
