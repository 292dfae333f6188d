//! Root document component - the complete HTML page.

use leptos::prelude::*;

use crate::content::PageContent;
use crate::page::LandingPage;
use crate::styles::{CSP, LANDING_CSS};
use crate::{RenderOptions, Stylesheet};

/// The complete HTML document: head with metadata and styles, body with the
/// landing page.
#[component]
pub fn LandingDocument(content: PageContent, options: RenderOptions) -> impl IntoView {
    let RenderOptions {
        title,
        lang,
        stylesheet,
    } = options;

    let styles = match stylesheet {
        Stylesheet::Inline => view! { <style>{LANDING_CSS}</style> }.into_any(),
        Stylesheet::Link(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
    };

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                {styles}
            </head>
            <body>
                <LandingPage content=content />
            </body>
        </html>
    }
}
