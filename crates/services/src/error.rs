//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use aid_core::model::ContentError;

/// Errors emitted by `ImageLoader`. Always recovered with a placeholder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetLoadError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image {path} is empty")]
    Empty { path: PathBuf },
    #[error("image {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("image {path} is not a supported format")]
    UnsupportedFormat { path: PathBuf },
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors emitted while reading `AppConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}

/// Errors emitted while loading topic content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentFileError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Content(#[from] ContentError),
}
