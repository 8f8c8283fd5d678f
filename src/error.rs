use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VariantError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Asset directory not found at {0}")]
    AssetDirNotFound(PathBuf),

    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Duplicate rename entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid target width: {0}")]
    InvalidWidth(u32),

    #[error("Pixel buffer does not match {width}x{height} ({len} bytes)")]
    InvalidRaster { width: u32, height: u32, len: usize },

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Output already exists: {0}")]
    OutputExists(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, VariantError>;
