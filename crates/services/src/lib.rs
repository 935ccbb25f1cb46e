#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod content_file;
pub mod error;

pub use assets::{DisplaySize, ImageLoader, ImageSlot, LoadedImage, PLACEHOLDER_TEXT};
pub use config::{AppConfig, CONFIG_FILE_NAME, LogLevel};
pub use content_file::{load_content_file, load_content_store, parse_content};
pub use error::{AssetLoadError, ConfigError, ContentFileError};
pub use image::ImageFormat;
