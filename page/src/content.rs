//! Page content: the literal copy and the ordered collections the page is
//! built from.
//!
//! Everything here is `'static` and fixed at authoring time. Components read
//! these collections instead of inlining the copy, so tests can assert on the
//! data independently of the markup.
//!
//! # Example
//!
//! ```rust
//! use pianolabs_page::content::{Align, EXPERIENCE_STEPS, FEATURES, PageSection};
//!
//! assert_eq!(FEATURES.len(), 4);
//! assert_eq!(EXPERIENCE_STEPS[1].align, Align::Right);
//! assert_eq!(PageSection::ALL[0], PageSection::Nav);
//! ```

use serde::{Deserialize, Serialize};

/// Product name shown in the navigation bar and the page title.
pub const BRAND: &str = "PianoLabs";

/// Label of the navigation bar button.
pub const NAV_CTA: &str = "Join the Evolution";

/// Hero sub-heading.
pub const HERO_SUBHEADING: &str = "Step into a new era of music creation. No more writer's block. \
     No more technical barriers. Just pure, uninhibited creative flow.";

/// Short list shown next to the hero headline, in display order.
pub const HERO_PILLARS: [&str; 3] = ["Compose", "Transform", "Evolve"];

/// Paragraph under the feature section heading.
pub const FEATURES_BLURB: &str = "Like having a seasoned producer by your side, PianoLabs \
     anticipates your needs, suggests creative directions, and helps you break through \
     creative barriers.";

/// Closing call-to-action heading.
pub const CTA_HEADING: &str = "Ready to evolve?";

/// Closing call-to-action paragraph.
pub const CTA_BODY: &str = "Join the next generation of music creators who are pushing the \
     boundaries of what's possible with AI-assisted composition.";

/// Closing call-to-action button label.
pub const CTA_BUTTON: &str = "Request Early Access";

/// Decorative glyphs drawn by [`crate::components::Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Piano body with keys
    Piano,
    /// Audio waveform
    Waveform,
    /// Sparkles
    Sparkles,
    /// Right-pointing arrow
    ArrowRight,
}

impl Glyph {
    /// Lowercase name, used as the `data-glyph` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Piano => "piano",
            Glyph::Waveform => "waveform",
            Glyph::Sparkles => "sparkles",
            Glyph::ArrowRight => "arrow-right",
        }
    }
}

/// Accent color applied to a glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Indigo (primary)
    #[default]
    Indigo,
    /// Purple (secondary)
    Purple,
}

impl Accent {
    /// CSS class carrying the accent color.
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Indigo => "accent-indigo",
            Accent::Purple => "accent-purple",
        }
    }
}

/// A feature card: icon, label and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    /// Glyph drawn before the label
    pub icon: Glyph,
    /// Glyph color
    pub accent: Accent,
    /// Short caption
    pub label: &'static str,
    /// Headline value under the caption
    pub value: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        icon: Glyph::Waveform,
        accent: Accent::Indigo,
        label: "Real-time Processing",
        value: "0.2ms Latency",
    },
    FeatureItem {
        icon: Glyph::Sparkles,
        accent: Accent::Purple,
        label: "AI Suggestions",
        value: "98% Accuracy",
    },
    FeatureItem {
        icon: Glyph::Piano,
        accent: Accent::Indigo,
        label: "MIDI Integration",
        value: "Universal",
    },
    FeatureItem {
        icon: Glyph::ArrowRight,
        accent: Accent::Purple,
        label: "Export Options",
        value: "Multiple Formats",
    },
];

/// Column order of an experience step.
///
/// `Left` puts the text block on the left and the image on the right.
/// `Right` swaps them visually; the markup order never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Text left, image right
    #[default]
    Left,
    /// Image left, text right
    Right,
}

/// Class names for the three elements of an experience step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepLayout {
    /// Grid container
    pub grid: &'static str,
    /// Text column (number, title, description)
    pub text: &'static str,
    /// Image column
    pub media: &'static str,
}

impl Align {
    /// Layout classes for this alignment.
    pub fn layout(self) -> StepLayout {
        match self {
            Align::Left => StepLayout {
                grid: "step step-left",
                text: "step-text",
                media: "step-media",
            },
            Align::Right => StepLayout {
                grid: "step step-right",
                text: "step-text order-last",
                media: "step-media order-first",
            },
        }
    }

    /// Lowercase name, used as the `data-align` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
        }
    }
}

/// One block of the experience narrative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExperienceStepItem {
    /// Two-digit step number, also keys the step image
    pub number: &'static str,
    /// Step heading
    pub title: &'static str,
    /// Step paragraph
    pub description: &'static str,
    /// Column order
    pub align: Align,
}

/// The experience narrative, in display order. Alignment alternates.
pub const EXPERIENCE_STEPS: [ExperienceStepItem; 3] = [
    ExperienceStepItem {
        number: "01",
        title: "Begin with a single note",
        description: "Every masterpiece starts somewhere. Play a note, and watch as PianoLabs \
             begins to understand your musical direction.",
        align: Align::Left,
    },
    ExperienceStepItem {
        number: "02",
        title: "Let AI expand your horizons",
        description: "Our AI suggests complementary chords and progressions, opening up new \
             creative pathways you might never have considered.",
        align: Align::Right,
    },
    ExperienceStepItem {
        number: "03",
        title: "Shape your sonic landscape",
        description: "Fine-tune every aspect of your creation with intuitive controls and \
             real-time feedback.",
        align: Align::Left,
    },
];

/// Image path for a step: `{image_base}/photo-{number}.png`.
///
/// A trailing slash on `image_base` is ignored.
///
/// ```rust
/// use pianolabs_page::content::step_image_src;
///
/// assert_eq!(step_image_src("/images/", "02"), "/images/photo-02.png");
/// ```
pub fn step_image_src(image_base: &str, number: &str) -> String {
    format!("{}/photo-{}.png", image_base.trim_end_matches('/'), number)
}

/// Top-level, vertically stacked regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSection {
    /// Navigation bar
    Nav,
    /// Headline block
    Hero,
    /// Feature grid
    Features,
    /// Numbered narrative
    Experience,
    /// Closing call-to-action
    Cta,
}

impl PageSection {
    /// Every section, in render order.
    pub const ALL: [PageSection; 5] = [
        PageSection::Nav,
        PageSection::Hero,
        PageSection::Features,
        PageSection::Experience,
        PageSection::Cta,
    ];

    /// Lowercase name, used as the `data-section` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSection::Nav => "nav",
            PageSection::Hero => "hero",
            PageSection::Features => "features",
            PageSection::Experience => "experience",
            PageSection::Cta => "cta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn steps_are_numbered_in_order_and_alternate() {
        let numbers: Vec<_> = EXPERIENCE_STEPS.iter().map(|s| s.number).collect();
        let aligns: Vec<_> = EXPERIENCE_STEPS.iter().map(|s| s.align).collect();

        assert_eq!(numbers, vec!["01", "02", "03"]);
        assert_eq!(aligns, vec![Align::Left, Align::Right, Align::Left]);
    }

    #[test]
    fn right_alignment_swaps_column_order() {
        let left = Align::Left.layout();
        let right = Align::Right.layout();

        assert!(!left.text.contains("order-"));
        assert!(!left.media.contains("order-"));
        assert!(right.text.contains("order-last"));
        assert!(right.media.contains("order-first"));
        assert_ne!(left.grid, right.grid);
    }

    #[test]
    fn default_alignment_is_left() {
        assert_eq!(Align::default(), Align::Left);
        assert_eq!(Align::default().layout(), Align::Left.layout());
    }

    #[test]
    fn image_src_follows_step_number() {
        assert_eq!(step_image_src("/images", "01"), "/images/photo-01.png");
        assert_eq!(
            step_image_src("https://cdn.example.com/img/", "03"),
            "https://cdn.example.com/img/photo-03.png"
        );
    }

    #[test]
    fn section_names_are_unique_and_in_render_order() {
        let names: Vec<_> = PageSection::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["nav", "hero", "features", "experience", "cta"]);

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }
}
