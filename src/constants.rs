pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Appended to the input file stem when naming the output file.
pub const OUTPUT_SUFFIX: &str = "_compressed";
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Extensions picked up when an input is a directory or glob pattern.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

pub const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];
pub const SIZE_THRESHOLD: f64 = 1024.0;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Report markers
pub const SUCCESS_MARKER: &str = "✓";
pub const FAILURE_MARKER: &str = "✗";
pub const SUMMARY_HEADER: &str = "=== COMPRESSION COMPLETE ===";
