//! Render the landing page to a local file.
//!
//! Run with: `cargo run -p pianolabs-page --example render_page`

use pianolabs_page::{SiteConfig, render_landing_page};

fn main() {
    let html = render_landing_page(&SiteConfig::default());

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
