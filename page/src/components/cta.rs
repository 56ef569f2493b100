//! Closing call-to-action section.

use leptos::prelude::*;

use crate::content::{CTA_BODY, CTA_BUTTON, CTA_HEADING, PageSection};

/// Closing call-to-action: heading, paragraph, button.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="section section-bordered" data-section=PageSection::Cta.as_str()>
            <div class="container section-body">
                <div class="cta">
                    <h2 class="cta-heading">{CTA_HEADING}</h2>
                    <p class="cta-body">{CTA_BODY}</p>
                    <button type="button" class="btn btn-primary btn-lg">{CTA_BUTTON}</button>
                </div>
            </div>
        </section>
    }
}
