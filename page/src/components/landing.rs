//! Root page component - every section, top to bottom.

use leptos::prelude::*;

use super::{CallToAction, ExperienceSection, FeatureSection, Hero, Nav};

/// The full landing page body.
///
/// Section order is fixed: nav, hero, features, experience, cta.
#[component]
pub fn LandingPage(
    /// URL prefix for experience step photos
    #[prop(into)]
    image_base: String,
) -> impl IntoView {
    view! {
        <div class="page">
            <Nav />
            <Hero />
            <FeatureSection />
            <ExperienceSection image_base=image_base />
            <CallToAction />
        </div>
    }
}
