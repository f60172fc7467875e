pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod report;
pub mod utils;
pub mod validation;

pub use batch::{
    collect_image_files, compress_batch, compress_batch_with, spawn_batch, BatchEvent,
    BatchHandle, BatchSummary, CompressionRequest,
};
pub use error::{CompressionError, Result};
pub use processing::{
    compress_one, generate_output_path, normalize_color, CompressionOutcome, CompressionResult,
    FileStats,
};
pub use report::{format_result_block, format_summary_block};
pub use utils::{calculate_compression_ratio, format_size, is_image_file};
