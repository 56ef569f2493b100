//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function with fixed or
//! literal props. Nothing here holds state; rendering is a single pass.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage
//!     ├── Nav
//!     ├── Hero
//!     ├── FeatureSection
//!     │   └── Feature (x4)
//!     ├── ExperienceSection
//!     │   └── ExperienceStep (x3)
//!     └── CallToAction
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_landing_page`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use pianolabs_page::components::{Feature, ExperienceStep};
//! use pianolabs_page::content::{Align, Glyph};
//!
//! view! {
//!     <Feature icon=Glyph::Piano label="MIDI Integration" value="Universal" />
//!     <ExperienceStep number="02" title="..." description="..." align=Align::Right image_base="/images" />
//! }
//! ```

mod cta;
mod document;
mod experience;
mod features;
mod hero;
mod icons;
mod landing;
mod nav;

pub use cta::CallToAction;
pub use document::LandingDocument;
pub use experience::{ExperienceSection, ExperienceStep};
pub use features::{Feature, FeatureSection};
pub use hero::Hero;
pub use icons::{Icon, glyph_paths};
pub use landing::LandingPage;
pub use nav::Nav;
