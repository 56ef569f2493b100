//! Feature grid - heading, blurb and the four feature cards.

use leptos::prelude::*;

use super::Icon;
use crate::content::{Accent, FEATURES, FEATURES_BLURB, Glyph, PageSection};

/// A single feature card: glyph and label on one line, value beneath.
#[component]
pub fn Feature(
    icon: Glyph,
    #[prop(optional)] accent: Accent,
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-head">
                <Icon glyph=icon accent=accent />
                <span class="feature-label">{label}</span>
            </div>
            <div class="feature-value">{value}</div>
        </div>
    }
}

/// Feature section: copy on the left, card grid on the right.
#[component]
pub fn FeatureSection() -> impl IntoView {
    view! {
        <section class="section section-bordered features" data-section=PageSection::Features.as_str()>
            <div class="features-glow"></div>
            <div class="container section-body">
                <div class="features-layout">
                    <div class="features-copy">
                        <h2 class="section-title">
                            "Your musical companion, powered by "
                            <span class="text-accent">"artificial intelligence"</span>
                        </h2>
                        <div class="accent-rule"></div>
                        <p class="features-blurb">{FEATURES_BLURB}</p>
                    </div>
                    <div class="features-grid">
                        {FEATURES.iter().map(|item| view! {
                            <Feature
                                icon=item.icon
                                accent=item.accent
                                label=item.label
                                value=item.value
                            />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
