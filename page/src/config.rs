//! Render-time settings for the landing document.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! image_base = "https://cdn.pianolabs.ai/images"
//!
//! [stylesheet]
//! mode = "linked"
//! href = "/styles.css"
//! ```

use serde::{Deserialize, Serialize};

use crate::content::BRAND;

/// Document metadata and asset locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// URL prefix under which `photo-NN.png` step images are served
    pub image_base: String,
    /// Where the stylesheet comes from
    pub stylesheet: Stylesheet,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: BRAND.to_string(),
            description: "Where human creativity meets artificial intelligence. \
                          AI-assisted music composition from PianoLabs."
                .to_string(),
            lang: "en".to_string(),
            image_base: "/images".to_string(),
            stylesheet: Stylesheet::Inline,
        }
    }
}

/// Stylesheet delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Stylesheet {
    /// Embed [`crate::styles::LANDING_CSS`] in a `<style>` element
    #[default]
    Inline,
    /// Reference an external file; the caller ships the CSS next to the page
    Linked {
        /// Value of the `<link href>` attribute
        href: String,
    },
}
