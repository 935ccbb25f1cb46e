//! Best-effort loading of topic illustrations.
//!
//! Images are read from disk, decoded, scaled to the fixed display size and
//! handed to the view as PNG `data:` URIs. A failure of any kind turns into a
//! text placeholder; it is logged, never shown as an error.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use image::imageops::FilterType;

use crate::config::AppConfig;
use crate::error::AssetLoadError;

/// Shown in place of an image that could not be loaded.
pub const PLACEHOLDER_TEXT: &str = "(Image not found)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedImage {
    /// Format of the file on disk; the data URI is always PNG.
    pub source_format: ImageFormat,
    pub data_uri: String,
    pub size: DisplaySize,
}

/// What the step viewer draws in the image slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Image(LoadedImage),
    Placeholder,
}

#[derive(Clone, Debug)]
pub struct ImageLoader {
    root: PathBuf,
    size: DisplaySize,
    max_bytes: u64,
}

impl ImageLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, size: DisplaySize, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            size,
            max_bytes,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.asset_root.clone(),
            config.image_size(),
            config.max_image_bytes,
        )
    }

    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// # Errors
    ///
    /// Returns `AssetLoadError` if the file is missing, unreadable, empty,
    /// over the size limit, not a supported format or fails to decode.
    pub fn load(&self, path: &Path) -> Result<LoadedImage, AssetLoadError> {
        let path = self.resolve(path);

        let size = match std::fs::metadata(&path) {
            Ok(meta) => meta.len(),
            Err(source) => return Err(AssetLoadError::Io { path, source }),
        };
        if size > self.max_bytes {
            return Err(AssetLoadError::TooLarge {
                path,
                size,
                limit: self.max_bytes,
            });
        }

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(AssetLoadError::Io { path, source }),
        };
        if bytes.is_empty() {
            return Err(AssetLoadError::Empty { path });
        }
        let Ok(source_format) = image::guess_format(&bytes) else {
            return Err(AssetLoadError::UnsupportedFormat { path });
        };

        let decoded = match image::load_from_memory_with_format(&bytes, source_format) {
            Ok(decoded) => decoded,
            Err(source) => return Err(AssetLoadError::Decode { path, source }),
        };
        let scaled = decoded.resize_exact(self.size.width, self.size.height, FilterType::Triangle);

        let mut png = Cursor::new(Vec::new());
        if let Err(source) = scaled.write_to(&mut png, ImageFormat::Png) {
            return Err(AssetLoadError::Decode { path, source });
        }

        Ok(LoadedImage {
            source_format,
            data_uri: format!("data:image/png;base64,{}", STANDARD.encode(png.get_ref())),
            size: self.size,
        })
    }

    /// Like `load`, but any failure becomes `ImageSlot::Placeholder`.
    #[must_use]
    pub fn load_or_placeholder(&self, path: &Path) -> ImageSlot {
        match self.load(path) {
            Ok(image) => ImageSlot::Image(image),
            Err(err) => {
                tracing::warn!(error = %err, "image unavailable, showing placeholder");
                ImageSlot::Placeholder
            }
        }
    }
}
