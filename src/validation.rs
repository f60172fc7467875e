//! Precondition checks run before a batch touches any file.

use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use std::path::{Path, PathBuf};

/// Reject quality values outside 1..=100.
pub fn validate_quality(quality: u8) -> Result<u8> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(CompressionError::InvalidQuality(quality));
    }
    Ok(quality)
}

/// A batch needs at least one input file.
pub fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(CompressionError::NoInputFiles);
    }
    Ok(())
}

/// Check that an output directory was given and already exists.
///
/// The directory is never created here; an empty path counts as not given.
pub fn validate_output_dir(output_dir: Option<&Path>) -> Result<PathBuf> {
    let output_dir = match output_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Err(CompressionError::MissingOutputDirectory),
    };

    if !output_dir.is_dir() {
        return Err(CompressionError::OutputDirectoryNotFound(
            output_dir.to_path_buf(),
        ));
    }

    Ok(output_dir.to_path_buf())
}
