//! Render the landing page with edited content.
//!
//! Run with: `cargo run -p saas-landing --example custom_content`

use saas_landing::content::PageContent;
use saas_landing::{RenderOptions, Stylesheet, render_document};

fn main() {
    let mut content = PageContent::default();
    content.nav.brand = "Acme Cloud".into();
    content.hero.heading = "Run your team on Acme Cloud".into();
    content.pricing.plans[2].monthly_price = 149;

    if let Err(err) = content.validate() {
        eprintln!("invalid content: {err}");
        std::process::exit(1);
    }

    let options = RenderOptions {
        title: "Acme Cloud".into(),
        stylesheet: Stylesheet::Link("landing.css".into()),
        ..Default::default()
    };

    let html = render_document(&content, &options);

    let output_path = "acme_landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");
    std::fs::write("landing.css", saas_landing::styles::LANDING_CSS).expect("Failed to write CSS");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
