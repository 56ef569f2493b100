//! Static site output: the document, its stylesheet and an asset check.

use std::path::{Component, Path, PathBuf};

use pianolabs_page::content::{
    EXPERIENCE_STEPS, ExperienceStepItem, FEATURES, FeatureItem, HERO_PILLARS, PageSection,
    step_image_src,
};
use pianolabs_page::styles::LANDING_CSS;
use pianolabs_page::{SiteConfig, Stylesheet, render_landing_page};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SiteError, SiteResult};

/// Name of the rendered document inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Files produced by [`build_site`].
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
    /// Step images not found under the static directory
    pub missing_assets: Vec<PathBuf>,
}

/// Render the page into `out_dir`.
///
/// Writes `index.html`. With a linked stylesheet whose `href` is a local
/// path, the CSS is written to that path under `out_dir` as well. When
/// `static_dir` is given, step images are looked up there and each missing
/// one is logged; missing images never fail the build.
pub fn build_site(
    config: &SiteConfig,
    out_dir: &Path,
    static_dir: Option<&Path>,
) -> SiteResult<BuildReport> {
    let mut report = BuildReport::default();

    let css_target = match &config.stylesheet {
        Stylesheet::Linked { href } => {
            let target = stylesheet_path(href)?;
            if target.is_none() {
                info!(href = %href, "stylesheet is hosted elsewhere, not writing CSS");
            }
            target
        }
        Stylesheet::Inline => None,
    };

    create_dir(out_dir)?;

    let index = out_dir.join(INDEX_FILE);
    write_file(&index, &render_landing_page(config))?;
    report.written.push(index);

    if let Some(rel) = css_target {
        let css_path = out_dir.join(rel);
        if let Some(parent) = css_path.parent() {
            create_dir(parent)?;
        }
        write_file(&css_path, LANDING_CSS)?;
        report.written.push(css_path);
    }

    if let Some(static_dir) = static_dir {
        report.missing_assets = missing_step_images(config, static_dir);
        for path in &report.missing_assets {
            warn!(path = %path.display(), "step image missing");
        }
    }

    info!(
        out = %out_dir.display(),
        files = report.written.len(),
        "site built"
    );
    Ok(report)
}

/// Step images that should exist under `static_dir` but don't.
///
/// Images served from another host (absolute URLs) are skipped.
pub fn missing_step_images(config: &SiteConfig, static_dir: &Path) -> Vec<PathBuf> {
    EXPERIENCE_STEPS
        .iter()
        .filter_map(|step| {
            let src = step_image_src(&config.image_base, step.number);
            match local_path(&src) {
                Some(rel) => Some(static_dir.join(rel)),
                None => {
                    debug!(src = %src, "remote image, skipping check");
                    None
                }
            }
        })
        .filter(|path| !path.is_file())
        .collect()
}

/// Structured dump of the page content with resolved image paths.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Sections in render order
    pub sections: Vec<PageSection>,
    /// Hero list entries
    pub hero_pillars: Vec<&'static str>,
    /// Feature cards in display order
    pub features: Vec<FeatureItem>,
    /// Experience steps in display order
    pub steps: Vec<ManifestStep>,
}

/// An experience step plus its image URL.
#[derive(Debug, Serialize)]
pub struct ManifestStep {
    /// Step content
    #[serde(flatten)]
    pub step: ExperienceStepItem,
    /// Resolved `src` of the step image
    pub image: String,
}

impl Manifest {
    /// Build the manifest for a config.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            sections: PageSection::ALL.to_vec(),
            hero_pillars: HERO_PILLARS.to_vec(),
            features: FEATURES.to_vec(),
            steps: EXPERIENCE_STEPS
                .iter()
                .map(|step| ManifestStep {
                    step: *step,
                    image: step_image_src(&config.image_base, step.number),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Site-relative path for a URL, or `None` when it points at another host.
///
/// Any `?query` or `#fragment` suffix is dropped.
fn local_path(url: &str) -> Option<&str> {
    if url.contains("://") || url.starts_with("//") {
        return None;
    }
    let path = url.split(['?', '#']).next().unwrap_or_default();
    Some(path.trim_start_matches('/'))
}

/// Where a linked stylesheet lands relative to the output directory.
///
/// `None` for stylesheets on another host. The href must name a file and
/// stay inside the output directory.
fn stylesheet_path(href: &str) -> SiteResult<Option<PathBuf>> {
    let Some(rel) = local_path(href) else {
        return Ok(None);
    };

    let invalid = |reason: &'static str| SiteError::StylesheetHref {
        href: href.to_string(),
        reason,
    };

    if rel.is_empty() || rel.ends_with('/') {
        return Err(invalid("does not name a file"));
    }

    let mut path = PathBuf::new();
    for component in Path::new(rel).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("points outside the output directory"));
            }
        }
    }

    if path.as_os_str().is_empty() {
        return Err(invalid("does not name a file"));
    }
    Ok(Some(path))
}

fn create_dir(path: &Path) -> SiteResult<()> {
    std::fs::create_dir_all(path).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> SiteResult<()> {
    std::fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
