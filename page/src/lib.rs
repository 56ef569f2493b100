//! # pianolabs-page
//!
//! Leptos SSR renderer for the PianoLabs landing page.
//!
//! The page is a fixed stack of presentational sections (navigation, hero,
//! feature grid, experience narrative, call-to-action) rendered once into a
//! static HTML document. There is no client runtime and no hydration.
//!
//! ## Quick Start
//!
//! ```rust
//! use pianolabs_page::{render_landing_page, SiteConfig};
//!
//! let html = render_landing_page(&SiteConfig::default());
//! assert!(html.contains("Ready to evolve?"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Literal copy and the ordered feature/step collections
//! - [`components`] - Leptos UI components
//! - [`config`] - Document metadata and asset locations
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <LandingPage image_base="/images" /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod styles;

pub use config::{SiteConfig, Stylesheet};

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page document.
///
/// Returns a full HTML document as a `String`, starting with `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use pianolabs_page::{render_landing_page, SiteConfig};
///
/// let config = SiteConfig {
///     image_base: "https://cdn.example.com/img".into(),
///     ..Default::default()
/// };
/// let html = render_landing_page(&config);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("https://cdn.example.com/img/photo-01.png"));
/// ```
pub fn render_landing_page(config: &SiteConfig) -> String {
    let doc = view! { <LandingDocument config=config.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page with [`SiteConfig::default`].
pub fn render_landing_page_default() -> String {
    render_landing_page(&SiteConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{EXPERIENCE_STEPS, FEATURES};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_default_document() {
        let html = render_landing_page_default();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("PianoLabs"));
        assert!(html.contains("Ready to evolve?"));
        assert_eq!(html.matches("class=\"feature-card\"").count(), 4);
        assert_eq!(html.matches("data-step=").count(), 3);
    }

    #[test]
    fn every_feature_and_step_is_rendered() {
        let html = render_landing_page_default();

        for item in FEATURES.iter() {
            assert!(html.contains(item.label), "missing label {}", item.label);
            assert!(html.contains(item.value), "missing value {}", item.value);
        }
        for step in EXPERIENCE_STEPS.iter() {
            assert!(html.contains(step.title), "missing step {}", step.number);
            assert!(html.contains(&format!("/images/photo-{}.png", step.number)));
        }
    }

    #[test]
    fn inline_stylesheet_by_default() {
        let html = render_landing_page_default();

        assert!(html.contains("<style>"));
        assert!(html.contains(".feature-card"));
        assert!(!html.contains("rel=\"stylesheet\""));
    }

    #[test]
    fn linked_stylesheet_replaces_inline_css() {
        let config = SiteConfig {
            stylesheet: Stylesheet::Linked {
                href: "/styles.css".into(),
            },
            ..Default::default()
        };
        let html = render_landing_page(&config);

        assert!(html.contains("rel=\"stylesheet\""));
        assert!(html.contains("href=\"/styles.css\""));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn head_carries_title_description_and_lang() {
        let config = SiteConfig {
            title: "PianoLabs Preview".into(),
            description: "Preview build".into(),
            lang: "pl".into(),
            ..Default::default()
        };
        let html = render_landing_page(&config);

        assert!(html.contains("<title>PianoLabs Preview</title>"));
        assert!(html.contains("content=\"Preview build\""));
        assert!(html.contains("lang=\"pl\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_landing_page_default(), render_landing_page_default());
    }
}
