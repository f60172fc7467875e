/// Utility functions shared by the processing, batch and report modules.
use crate::constants::{
    PROGRESS_BAR_TEMPLATE, SIZE_THRESHOLD, SIZE_UNITS, SUPPORTED_IMAGE_EXTENSIONS,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Check if a file path has one of the supported image extensions
///
/// # Arguments
/// * `path` - The file path to check
///
/// # Returns
/// * `true` if the extension matches case-insensitively, `false` otherwise
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Create a batch progress bar with consistent styling
///
/// # Arguments
/// * `total_files` - Number of files in the batch
/// * `hidden` - Return a bar that never draws (quiet mode)
pub fn create_progress_bar(total_files: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total_files);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Format a byte count with binary units
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string with one decimal (e.g. "1.5 KB"), or
///   exactly "0 B" for zero
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= SIZE_THRESHOLD && unit_index < SIZE_UNITS.len() - 1 {
        size /= SIZE_THRESHOLD;
        unit_index += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[unit_index])
}

/// Calculate compression ratio as a percentage
///
/// # Arguments
/// * `original_size` - Original file size in bytes
/// * `compressed_size` - Compressed file size in bytes
///
/// # Returns
/// * Percentage reduction (negative when the output grew, 0 for an empty original)
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("test.jpg")));
        assert!(is_image_file(Path::new("test.JPEG")));
        assert!(is_image_file(Path::new("test.png")));
        assert!(is_image_file(Path::new("test.webp")));
        assert!(is_image_file(Path::new("test.bmp")));
        assert!(is_image_file(Path::new("test.TIFF")));

        assert!(!is_image_file(Path::new("test.gif")));
        assert!(!is_image_file(Path::new("test.tif")));
        assert!(!is_image_file(Path::new("test.txt")));
        assert!(!is_image_file(Path::new("test")));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_format_size_clamps_at_gb() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
    }

    #[test]
    fn test_create_progress_bar() {
        let pb = create_progress_bar(5, false);
        assert_eq!(pb.length(), Some(5));

        let hidden = create_progress_bar(5, true);
        assert!(hidden.is_hidden());
    }

    #[test]
    fn test_calculate_compression_ratio() {
        assert_eq!(calculate_compression_ratio(1000, 800), 20.0);
        assert_eq!(calculate_compression_ratio(1000, 1000), 0.0);
        assert_eq!(calculate_compression_ratio(0, 500), 0.0);
        assert!((calculate_compression_ratio(1000, 1200) + 20.0).abs() < 1e-9);
    }
}
