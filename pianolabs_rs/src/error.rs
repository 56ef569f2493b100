//! Error types for the site builder.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading config or writing the site.
///
/// Rendering itself cannot fail; everything here is I/O or parsing.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Config path as given
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`pianolabs_page::SiteConfig`]
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Config path as given
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Output file or directory could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Linked stylesheet href cannot be written under the output directory
    #[error("invalid stylesheet href {href:?}: {reason}")]
    StylesheetHref {
        /// href as configured
        href: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Manifest serialization error
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;
