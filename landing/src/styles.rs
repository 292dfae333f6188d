//! CSS styles for the landing page.
//!
//! Layout is declarative: the feature grid goes from one column to two at
//! 768px and three at 1024px, the pricing grid jumps to three columns at
//! 768px. No script ever measures the viewport.
//!
//! # Customization
//!
//! ```rust
//! use saas_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero { padding: 8rem 0; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".pricing-grid"));
//! ```

/// Content-Security-Policy for the rendered page. No scripts are emitted.
pub const CSP: &str =
    "default-src 'none'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; font-src 'self'";

/// Complete CSS for the page.
pub const LANDING_CSS: &str = r#"
:root {
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --blue-100: #dbeafe;
    --blue-400: #60a5fa;
    --blue-500: #3b82f6;
    --blue-600: #2563eb;
    --green-500: #22c55e;
    --white: #ffffff;
    --radius: 0.5rem;
    --font-sans: system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    background: var(--gray-50);
    line-height: 1.5;
}

h1, h2, h3, p, ul {
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

.page {
    min-height: 100vh;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

.text-center {
    text-align: center;
}

.grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 3rem;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: 1px solid transparent;
    border-radius: var(--radius);
    font-family: inherit;
    font-weight: 500;
    cursor: pointer;
}

.btn-md {
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
}

.btn-lg {
    padding: 1rem 2rem;
    font-size: 1.125rem;
}

.btn-default {
    background: var(--gray-900);
    color: var(--white);
}

.btn-outline {
    background: var(--white);
    color: var(--gray-900);
    border-color: var(--gray-100);
}

.btn-secondary {
    background: var(--gray-100);
    color: var(--gray-900);
}

.btn-block {
    width: 100%;
}

.icon-trailing {
    margin-left: 0.25rem;
}

.icon-success {
    color: var(--green-500);
    flex-shrink: 0;
    margin-right: 0.5rem;
}

/* Navigation */

.nav {
    background: var(--white);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 4rem;
}

.nav-brand {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--blue-600);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-link {
    color: var(--gray-700);
}

.nav-link:hover {
    color: var(--blue-600);
}

/* Hero */

.hero {
    padding: 5rem 0;
}

.hero-title {
    font-size: 3rem;
    font-weight: 800;
    margin-bottom: 1.5rem;
}

.hero-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    margin-bottom: 2rem;
}

/* Features */

.features {
    padding: 5rem 0;
    background: var(--white);
}

.feature {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}

.feature-icon {
    color: var(--blue-500);
    flex-shrink: 0;
}

.feature-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.feature-description {
    color: var(--gray-600);
}

/* Pricing */

.pricing {
    padding: 5rem 0;
    background: var(--gray-50);
}

.card {
    display: flex;
    flex-direction: column;
    background: var(--white);
    border: 1px solid var(--gray-100);
    border-radius: var(--radius);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.card-header, .card-content, .card-footer {
    padding: 1.5rem;
}

.card-content {
    padding-top: 0;
}

.card-footer {
    margin-top: auto;
}

.pricing-tier-popular {
    border: 2px solid var(--blue-500);
}

.tier-name {
    font-size: 1.5rem;
    font-weight: 700;
}

.badge {
    display: inline-block;
    margin-top: 0.5rem;
    padding: 0.25rem 0.5rem;
    border-radius: 9999px;
    background: var(--blue-500);
    color: var(--white);
    font-size: 0.875rem;
}

.tier-price {
    font-size: 2.25rem;
    font-weight: 700;
}

.tier-period {
    font-size: 1.25rem;
    color: var(--gray-500);
}

.tier-features {
    list-style: none;
    padding: 0;
    margin-top: 1rem;
}

.tier-feature {
    display: flex;
    align-items: center;
    margin-top: 0.5rem;
}

/* Call to action */

.cta {
    padding: 5rem 0;
    background: var(--blue-600);
}

.cta-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--white);
    margin-bottom: 1.5rem;
}

.cta-description {
    font-size: 1.25rem;
    color: var(--blue-100);
    margin-bottom: 2rem;
}

/* Footer */

.footer {
    padding: 3rem 0;
    background: var(--gray-800);
    color: var(--white);
}

.footer-grid {
    grid-template-columns: repeat(2, 1fr);
}

.footer-group-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.footer-links {
    list-style: none;
    padding: 0;
}

.footer-link-item + .footer-link-item {
    margin-top: 0.5rem;
}

.footer-link:hover {
    color: var(--blue-400);
}

.footer-bottom {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid var(--gray-700);
    text-align: center;
}

/* Responsive columns */

@media (min-width: 640px) {
    .container {
        padding: 0 1.5rem;
    }
}

@media (min-width: 768px) {
    .features-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .pricing-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .footer-grid {
        grid-template-columns: repeat(4, 1fr);
    }
}

@media (min-width: 1024px) {
    .container {
        padding: 0 2rem;
    }

    .features-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_grid_steps_up_to_three_columns() {
        let wide = LANDING_CSS
            .split("@media (min-width: 1024px)")
            .nth(1)
            .expect("wide breakpoint");
        assert!(wide.contains(".features-grid"));
        assert!(wide.contains("repeat(3, 1fr)"));
    }

    #[test]
    fn css_is_safe_to_inline() {
        // Inline <style> text must not need HTML escaping.
        assert!(!LANDING_CSS.contains('<'));
        assert!(!LANDING_CSS.contains('>'));
        assert!(!LANDING_CSS.contains('&'));
    }
}
