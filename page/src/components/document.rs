//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::LandingPage;
use crate::config::{SiteConfig, Stylesheet};
use crate::styles::LANDING_CSS;

/// The complete HTML document: head with metadata and styles, body with the page.
#[component]
pub fn LandingDocument(config: SiteConfig) -> impl IntoView {
    let SiteConfig {
        title,
        description,
        lang,
        image_base,
        stylesheet,
    } = config;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <PageStyles stylesheet=stylesheet />
            </head>
            <body>
                <LandingPage image_base=image_base />
            </body>
        </html>
    }
}

/// Inline `<style>` or a `<link>` to an external stylesheet.
#[component]
fn PageStyles(stylesheet: Stylesheet) -> impl IntoView {
    match stylesheet {
        Stylesheet::Inline => view! { <style>{LANDING_CSS}</style> }.into_any(),
        Stylesheet::Linked { href } => view! { <link rel="stylesheet" href=href /> }.into_any(),
    }
}
