//! CSS styles for the landing page.
//!
//! The stylesheet is plain CSS with no build step. It is either inlined in
//! the document head or written next to `index.html`, depending on
//! [`crate::Stylesheet`].
//!
//! # Customization
//!
//! ```rust
//! use pianolabs_page::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```
//!
//! The CSS is emitted verbatim inside `<style>`, so it must never contain `</`.

/// Complete CSS for the landing page - black canvas with indigo/purple accents.
///
/// Breakpoints follow the usual 640 / 768 / 1024 px steps. Experience step
/// column swapping (`order-first` / `order-last`) only applies from 1024 px,
/// narrower screens always stack text above the image.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #000000;
    --text: #ffffff;
    --text-dim: rgba(255, 255, 255, 0.6);
    --border: rgba(255, 255, 255, 0.1);
    --card: rgba(255, 255, 255, 0.02);
    --card-hover: rgba(255, 255, 255, 0.05);
    --indigo-400: #818cf8;
    --indigo-500: #6366f1;
    --indigo-600: #4f46e5;
    --purple-400: #c084fc;
    --purple-500: #a855f7;
    --purple-600: #9333ea;
    --purple-700: #7e22ce;
    --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
    --radius: 0.5rem;
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
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

::selection {
    background: rgba(255, 255, 255, 0.2);
}

h1, h2, h3, p {
    margin: 0;
}

.page {
    min-height: 100vh;
}

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1rem;
}

.section {
    position: relative;
}

.section-bordered {
    border-top: 1px solid var(--border);
}

.section-body {
    position: relative;
    padding-top: 4rem;
    padding-bottom: 4rem;
}

.text-accent,
.accent-indigo {
    color: var(--indigo-400);
}

.accent-purple {
    color: var(--purple-400);
}

.icon {
    flex-shrink: 0;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border: 0;
    border-radius: var(--radius);
    padding: 0.5rem 1rem;
    font: inherit;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: color 150ms ease, background 150ms ease;
}

.btn-ghost {
    background: transparent;
    color: var(--text-dim);
}

.btn-ghost:hover {
    color: var(--indigo-400);
}

.btn-primary {
    color: var(--text);
    background: linear-gradient(to right, var(--indigo-500), var(--purple-600));
}

.btn-primary:hover {
    background: linear-gradient(to right, var(--indigo-600), var(--purple-700));
}

.btn-lg {
    padding: 0.75rem 2rem;
    font-size: 1rem;
}

/* Navigation */

.nav {
    border-bottom: 1px solid var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--text);
    text-decoration: none;
}

.nav-brand .icon {
    color: var(--indigo-400);
}

.nav-brand-name {
    font-size: 1.25rem;
    font-weight: 300;
    letter-spacing: 0.025em;
}

.nav-actions {
    display: flex;
    align-items: center;
    gap: 2rem;
}

/* Hero */

.hero-grid {
    display: grid;
    gap: 4rem;
    align-items: start;
}

.hero-copy {
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

.hero-title {
    font-size: 3rem;
    font-weight: 200;
    line-height: 1.1;
}

.hero-subheading {
    max-width: 36rem;
    font-size: 1.25rem;
    font-weight: 300;
    color: var(--text-dim);
}

.hero-panel {
    position: relative;
    margin-top: 2rem;
}

.hero-glow {
    position: absolute;
    inset: -0.25rem;
    background: linear-gradient(to right, rgba(99, 102, 241, 0.2), rgba(168, 85, 247, 0.2));
    filter: blur(40px);
}

.hero-pillars {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    margin: 0;
    padding: 2rem;
    list-style: none;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    border-radius: var(--radius);
}

.hero-pillar {
    display: flex;
    align-items: center;
    gap: 1rem;
    font-size: 1.125rem;
    font-weight: 300;
}

/* Features */

.features-glow {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(49, 46, 129, 0.03), transparent);
    pointer-events: none;
}

.features-layout {
    display: grid;
    gap: 4rem;
}

.features-copy {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 200;
}

.accent-rule {
    width: 6rem;
    height: 1px;
    background: linear-gradient(to right, var(--indigo-400), var(--purple-500));
}

.features-blurb {
    font-size: 1.125rem;
    line-height: 1.625;
    color: var(--text-dim);
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
    font-size: 0.875rem;
}

.feature-card {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1rem;
    border-radius: var(--radius);
    background: var(--card);
    transition: background 150ms ease;
}

.feature-card:hover {
    background: var(--card-hover);
}

.feature-head {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--text-dim);
}

.feature-value {
    font-size: 1.125rem;
    font-weight: 300;
}

/* Experience */

.steps {
    display: flex;
    flex-direction: column;
    gap: 6rem;
}

.step {
    display: grid;
    gap: 2rem;
    align-items: center;
}

.step-text {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.step-number {
    font-size: 3.75rem;
    font-weight: 200;
    line-height: 1;
    color: var(--indigo-400);
}

.step-title {
    font-size: 1.5rem;
    font-weight: 300;
}

.step-description {
    line-height: 1.625;
    color: var(--text-dim);
}

.step-media {
    position: relative;
    aspect-ratio: 4 / 3;
    overflow: hidden;
    border-radius: var(--radius);
}

.step-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

/* Call to action */

.cta {
    max-width: 32rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
    text-align: center;
}

.cta-heading {
    font-size: 1.875rem;
    font-weight: 300;
}

.cta-body {
    color: var(--text-dim);
}

/* Responsive */

@media (min-width: 640px) {
    .features-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

@media (min-width: 768px) {
    .section-body {
        padding-top: 8rem;
        padding-bottom: 8rem;
    }

    .hero-title {
        font-size: 3.75rem;
    }

    .section-title {
        font-size: 2.25rem;
    }

    .features-layout {
        gap: 6rem;
    }
}

@media (min-width: 1024px) {
    .hero-grid {
        grid-template-columns: 1fr 400px;
    }

    .hero-panel {
        margin-top: 0;
    }

    .hero-title {
        font-size: 6rem;
    }

    .features-layout {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .step-left {
        grid-template-columns: 1fr 2fr;
    }

    .step-right {
        grid-template-columns: 2fr 1fr;
    }

    .order-first {
        order: 1;
    }

    .order-last {
        order: 2;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_cannot_close_style_element() {
        assert!(!LANDING_CSS.contains("</"));
    }

    #[test]
    fn column_swap_only_on_wide_screens() {
        let wide = LANDING_CSS.find("@media (min-width: 1024px)").expect("lg breakpoint");
        let order_first = LANDING_CSS.find(".order-first").expect("order-first rule");
        let order_last = LANDING_CSS.find(".order-last").expect("order-last rule");

        assert!(order_first > wide);
        assert!(order_last > wide);
    }
}
