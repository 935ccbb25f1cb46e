//! Topic content loaded from JSON, or the built-in catalog.
//!
//! File shape:
//!
//! ```json
//! [
//!   { "name": "Burns", "steps": ["..."], "image": "images/burns.jpg", "emergency": ["..."] }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use aid_core::catalog;
use aid_core::model::{ContentStore, Topic};

use crate::config::AppConfig;
use crate::error::ContentFileError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicRecord {
    name: String,
    steps: Vec<String>,
    image: String,
    #[serde(default)]
    emergency: Vec<String>,
}

/// # Errors
///
/// Returns `ContentFileError::Parse` for malformed JSON and
/// `ContentFileError::Content` when the topics break a store rule.
pub fn parse_content(raw: &str) -> Result<ContentStore, ContentFileError> {
    let records: Vec<TopicRecord> = serde_json::from_str(raw)?;
    let topics = records
        .into_iter()
        .map(|record| Topic::new(record.name, record.steps, record.image, record.emergency))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ContentStore::new(topics)?)
}

/// # Errors
///
/// Returns `ContentFileError` if the file cannot be read or is invalid.
pub fn load_content_file(path: &Path) -> Result<ContentStore, ContentFileError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_content(&raw)?;
    tracing::info!(path = %path.display(), topics = store.len(), "loaded content file");
    Ok(store)
}

/// The configured content file, or the built-in catalog when none is set.
///
/// # Errors
///
/// Returns `ContentFileError` if the configured file is unusable.
pub fn load_content_store(config: &AppConfig) -> Result<ContentStore, ContentFileError> {
    match config.content_file.as_deref() {
        Some(path) => load_content_file(path),
        None => Ok(catalog::try_builtin()?),
    }
}
