//! # pianolabs
//!
//! Static site builder for the PianoLabs landing page.
//!
//! The page itself is rendered by [`pianolabs_page`]; this crate loads the
//! site config, writes the output directory and checks that step images are
//! in place.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use pianolabs::site::build_site;
//! use pianolabs_page::SiteConfig;
//! use std::path::Path;
//!
//! let report = build_site(&SiteConfig::default(), Path::new("dist"), Some(Path::new("public")))
//!     .unwrap();
//! println!("wrote {} files", report.written.len());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! pianolabs build --out dist               # index.html with inline CSS
//! pianolabs build --css linked             # index.html + styles.css
//! pianolabs build --static-dir public      # also check step images
//! pianolabs render > index.html            # document to stdout
//! pianolabs manifest                       # page content as JSON
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod site;

pub use error::{SiteError, SiteResult};
