use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Please select at least one image file")]
    NoInputFiles,

    #[error("Please select an output directory")]
    MissingOutputDirectory,

    #[error("Output directory does not exist: {0}")]
    OutputDirectoryNotFound(PathBuf),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Batch worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, CompressionError>;
