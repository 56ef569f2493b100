//! SVG icon components.
//!
//! Glyphs are stroke-drawn on a 24x24 view box (Lucide geometry) and
//! inlined so the page has no icon font or sprite to load.

use leptos::prelude::*;

use crate::content::{Accent, Glyph};

/// Renders an inline SVG for a [`Glyph`].
///
/// # Props
///
/// * `glyph` - Which glyph to draw
/// * `accent` - Stroke color class (default: indigo)
/// * `size` - Icon size in pixels (default: "20")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Piano size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to draw
    glyph: Glyph,
    /// Stroke color
    #[prop(optional)]
    accent: Accent,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
) -> impl IntoView {
    let class = format!("icon {}", accent.class());

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            data-glyph=glyph.as_str()
        >
            {glyph_paths(glyph).iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

/// Path data for a glyph, in drawing order.
pub fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Piano => PIANO,
        Glyph::Waveform => WAVEFORM,
        Glyph::Sparkles => SPARKLES,
        Glyph::ArrowRight => ARROW_RIGHT,
    }
}

const PIANO: &[&str] = &[
    "M18.5 8c-1.4 0-2.6-.8-3.2-2A6.87 6.87 0 0 0 2 9v11a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-8.5C22 9.6 20.4 8 18.5 8",
    "M2 14h20",
    "M6 14v4",
    "M10 14v4",
    "M14 14v4",
    "M18 14v4",
];

const WAVEFORM: &[&str] = &[
    "M2 13a2 2 0 0 0 2-2V7a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0V4a2 2 0 0 1 4 0v13a2 2 0 0 0 4 0v-4a2 2 0 0 1 2-2",
];

const SPARKLES: &[&str] = &[
    "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
    "M5 3v4",
    "M19 17v4",
    "M3 5h4",
    "M17 19h4",
];

const ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_glyph_has_paths() {
        for glyph in [Glyph::Piano, Glyph::Waveform, Glyph::Sparkles, Glyph::ArrowRight] {
            assert!(!glyph_paths(glyph).is_empty(), "{glyph:?} has no paths");
        }
    }

    #[test]
    fn icon_carries_glyph_and_accent() {
        let html = view! { <Icon glyph=Glyph::Sparkles accent=Accent::Purple /> }.to_html();

        assert!(html.contains("data-glyph=\"sparkles\""));
        assert!(html.contains("accent-purple"));
        assert_eq!(html.matches("<path").count(), SPARKLES.len());
    }
}
