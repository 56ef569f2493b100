//! Navigation bar - brand mark and a single call-to-action button.

use leptos::prelude::*;

use super::Icon;
use crate::content::{BRAND, Glyph, NAV_CTA, PageSection};

/// Top navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav" data-section=PageSection::Nav.as_str()>
            <div class="container nav-inner">
                <a href="/" class="nav-brand">
                    <Icon glyph=Glyph::Piano size="32" />
                    <span class="nav-brand-name">{BRAND}</span>
                </a>
                <div class="nav-actions">
                    <button type="button" class="btn btn-ghost">{NAV_CTA}</button>
                </div>
            </div>
        </nav>
    }
}
