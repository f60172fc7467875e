//! Text blocks shown to the user for each file and for the whole batch.

use crate::batch::BatchSummary;
use crate::constants::{FAILURE_MARKER, SUCCESS_MARKER, SUMMARY_HEADER};
use crate::processing::{CompressionOutcome, CompressionResult};
use crate::utils::format_size;

pub fn format_result_block(result: &CompressionResult) -> String {
    match &result.outcome {
        CompressionOutcome::Compressed(stats) => format!(
            "{} {}\n  Original: {}\n  Compressed: {}\n  Compression: {:.1}%\n",
            SUCCESS_MARKER,
            result.file_name,
            format_size(stats.original_size),
            format_size(stats.compressed_size),
            stats.ratio()
        ),
        CompressionOutcome::Failed(message) => format!(
            "{} {} - Error: {}\n",
            FAILURE_MARKER, result.file_name, message
        ),
    }
}

pub fn format_summary_block(summary: &BatchSummary) -> String {
    format!(
        "{}\nSuccessful: {}\nFailed: {}\nTotal original size: {}\nTotal compressed size: {}\nOverall compression: {:.1}%\n",
        SUMMARY_HEADER,
        summary.successful,
        summary.failed,
        format_size(summary.total_original_size),
        format_size(summary.total_compressed_size),
        summary.ratio()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::FileStats;
    use std::path::PathBuf;

    #[test]
    fn test_format_success_block() {
        let result = CompressionResult {
            input_path: PathBuf::from("/photos/cat.png"),
            file_name: "cat.png".to_string(),
            outcome: CompressionOutcome::Compressed(FileStats {
                output_path: PathBuf::from("/out/cat_compressed.jpg"),
                original_size: 2048,
                compressed_size: 512,
            }),
        };

        assert_eq!(
            format_result_block(&result),
            "✓ cat.png\n  Original: 2.0 KB\n  Compressed: 512.0 B\n  Compression: 75.0%\n"
        );
    }

    #[test]
    fn test_format_success_block_negative_ratio() {
        let result = CompressionResult {
            input_path: PathBuf::from("tiny.jpg"),
            file_name: "tiny.jpg".to_string(),
            outcome: CompressionOutcome::Compressed(FileStats {
                output_path: PathBuf::from("tiny_compressed.jpg"),
                original_size: 1000,
                compressed_size: 1250,
            }),
        };

        assert!(format_result_block(&result).contains("Compression: -25.0%"));
    }

    #[test]
    fn test_format_failure_block() {
        let result = CompressionResult {
            input_path: PathBuf::from("broken.jpg"),
            file_name: "broken.jpg".to_string(),
            outcome: CompressionOutcome::Failed("bad data".to_string()),
        };

        assert_eq!(format_result_block(&result), "✗ broken.jpg - Error: bad data\n");
    }

    #[test]
    fn test_format_summary_block() {
        let summary = BatchSummary {
            successful: 3,
            failed: 1,
            total_original_size: 1024 * 1024,
            total_compressed_size: 256 * 1024,
        };

        assert_eq!(
            format_summary_block(&summary),
            "=== COMPRESSION COMPLETE ===\n\
             Successful: 3\n\
             Failed: 1\n\
             Total original size: 1.0 MB\n\
             Total compressed size: 256.0 KB\n\
             Overall compression: 75.0%\n"
        );
    }

    #[test]
    fn test_format_summary_block_empty_batch() {
        let block = format_summary_block(&BatchSummary::default());
        assert!(block.contains("Total original size: 0 B"));
        assert!(block.contains("Overall compression: 0.0%"));
    }
}
