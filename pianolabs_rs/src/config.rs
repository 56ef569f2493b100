//! Configuration file support.
//!
//! Loads an optional `pianolabs.toml` holding [`SiteConfig`] fields.

use std::path::{Path, PathBuf};

use pianolabs_page::SiteConfig;
use tracing::{debug, warn};

use crate::error::{SiteError, SiteResult};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pianolabs.toml";

/// Resolve the site config.
///
/// An explicit path must exist and parse. Without one, `pianolabs.toml` in
/// `root` is used when present; if that file is unreadable or invalid a
/// warning is logged and defaults are used.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> SiteResult<SiteConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    let implicit = root.join(DEFAULT_CONFIG_FILE);
    if !implicit.exists() {
        debug!(path = %implicit.display(), "no config file, using defaults");
        return Ok(SiteConfig::default());
    }

    match load_from_path(&implicit) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("{e}; using defaults");
            Ok(SiteConfig::default())
        }
    }
}

/// Load config from a specific path.
pub fn load_from_path(path: &Path) -> SiteResult<SiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
        path: PathBuf::from(path),
        source,
    })?;

    let config = toml::from_str(&content).map_err(|source| SiteError::ConfigParse {
        path: PathBuf::from(path),
        source,
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pianolabs_page::Stylesheet;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_implicit_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn implicit_config_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "image_base = \"/static/photos\"\n[stylesheet]\nmode = \"linked\"\nhref = \"site.css\"\n",
        )
        .unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.image_base, "/static/photos");
        assert_eq!(
            config.stylesheet,
            Stylesheet::Linked {
                href: "site.css".into()
            }
        );
    }

    #[test]
    fn invalid_implicit_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "title = [").unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }

    #[test]
    fn explicit_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "lang = 42\n").unwrap();

        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
        assert!(err.to_string().contains("site.toml"));
    }
}
