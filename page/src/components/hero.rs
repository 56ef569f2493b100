//! Hero block - headline, sub-heading and the pillar list.

use leptos::prelude::*;

use super::Icon;
use crate::content::{Glyph, HERO_PILLARS, HERO_SUBHEADING, PageSection};

/// Hero section.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="section hero" data-section=PageSection::Hero.as_str()>
            <div class="container section-body">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1 class="hero-title">
                            "where human creativity meets "
                            <span class="text-accent">"artificial intelligence"</span>
                        </h1>
                        <p class="hero-subheading">{HERO_SUBHEADING}</p>
                    </div>
                    <div class="hero-panel">
                        <div class="hero-glow"></div>
                        <ul class="hero-pillars">
                            {HERO_PILLARS.iter().map(|pillar| view! {
                                <li class="hero-pillar">
                                    <Icon glyph=Glyph::ArrowRight />
                                    <span>{*pillar}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
