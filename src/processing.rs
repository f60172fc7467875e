use crate::constants::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::error::{CompressionError, Result};
use crate::utils::calculate_compression_ratio;
use image::{ColorType, DynamicImage, ImageReader};
use mozjpeg::{ColorSpace, Compress};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Byte sizes of one successfully compressed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub output_path: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
}

impl FileStats {
    /// Percentage reduction from original to compressed size. Negative when
    /// re-encoding made the file larger.
    pub fn ratio(&self) -> f64 {
        calculate_compression_ratio(self.original_size, self.compressed_size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompressionOutcome {
    Compressed(FileStats),
    Failed(String),
}

/// Outcome of compressing a single input file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub input_path: PathBuf,
    pub file_name: String,
    pub outcome: CompressionOutcome,
}

impl CompressionResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CompressionOutcome::Compressed(_))
    }

    pub fn stats(&self) -> Option<&FileStats> {
        match &self.outcome {
            CompressionOutcome::Compressed(stats) => Some(stats),
            CompressionOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            CompressionOutcome::Compressed(_) => None,
            CompressionOutcome::Failed(message) => Some(message),
        }
    }
}

/// Compresses one image into `output_dir` as `<stem>_compressed.jpg`.
///
/// Never fails: decode, encode and I/O errors are captured in the returned
/// result so a batch can carry on with the next file. `quality` is handed to
/// the encoder unchanged; range checks belong to the caller.
pub fn compress_one(input_path: &Path, output_dir: &Path, quality: u8) -> CompressionResult {
    let file_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.display().to_string());

    let outcome = generate_output_path(input_path, output_dir)
        .and_then(|output_path| {
            let (original_size, compressed_size) =
                process_image_pipeline(input_path, &output_path, quality)?;
            Ok(FileStats {
                output_path,
                original_size,
                compressed_size,
            })
        });

    let outcome = match outcome {
        Ok(stats) => {
            debug!(
                file = %file_name,
                original = stats.original_size,
                compressed = stats.compressed_size,
                "compressed"
            );
            CompressionOutcome::Compressed(stats)
        }
        Err(e) => {
            warn!(file = %file_name, error = %e, "compression failed");
            CompressionOutcome::Failed(e.to_string())
        }
    };

    CompressionResult {
        input_path: input_path.to_path_buf(),
        file_name,
        outcome,
    }
}

/// Derives the output path for an input file: the input's extension is
/// dropped and `_compressed.jpg` appended to the stem.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use jpeg_squeeze::generate_output_path;
///
/// let out = generate_output_path(Path::new("photos/cat.png"), Path::new("/tmp/out")).unwrap();
/// assert_eq!(out, PathBuf::from("/tmp/out/cat_compressed.jpg"));
/// ```
pub fn generate_output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_stem = input_path
        .file_stem()
        .ok_or_else(|| CompressionError::InvalidFileName(input_path.to_path_buf()))?;

    let output_filename = format!(
        "{}{}.{}",
        file_stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );
    Ok(output_dir.join(output_filename))
}

/// Core pipeline for one file: load -> normalize -> encode -> measure.
///
/// # Returns
/// * `Ok((original_size, compressed_size))` - Sizes read from the filesystem
///   after the output has been written
/// * `Err(CompressionError)` - If any step fails
pub fn process_image_pipeline(
    input_path: &Path,
    output_path: &Path,
    quality: u8,
) -> Result<(u64, u64)> {
    let (img, original_size) = load_image_with_metadata(input_path)?;
    let img = normalize_color(img);

    if let Err(e) = encode_jpeg(&img, output_path, quality) {
        // Drop whatever was partially written.
        let _ = fs::remove_file(output_path);
        return Err(e);
    }

    let compressed_size = fs::metadata(output_path)?.len();
    Ok((original_size, compressed_size))
}

/// Loads an image, sniffing the format from its content rather than the
/// extension, and returns it with the input file's size in bytes.
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    let file_size = fs::metadata(input_path)?.len();

    debug!(
        path = %input_path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded"
    );

    Ok((img, file_size))
}

/// Converts an image to a layout the JPEG encoder accepts.
///
/// 8-bit RGB and 8-bit grayscale pass through. Grayscale at higher bit depth
/// is narrowed to 8-bit grayscale. Everything else, including any image with
/// an alpha channel, becomes 8-bit RGB with alpha discarded.
pub fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 | ColorType::L8 => img,
        ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Encodes an already normalized image as a JPEG file at `quality`, with
/// optimized Huffman tables.
pub fn encode_jpeg(img: &DynamicImage, output_path: &Path, quality: u8) -> Result<()> {
    let color_space = match img.color() {
        ColorType::L8 => ColorSpace::JCS_GRAYSCALE,
        _ => ColorSpace::JCS_RGB,
    };

    let mut comp = Compress::new(color_space);
    comp.set_size(img.width() as usize, img.height() as usize);
    comp.set_quality(f32::from(quality));
    comp.set_optimize_coding(true);

    let writer = BufWriter::new(File::create(output_path)?);
    let mut started = comp.start_compress(writer)?;
    started.write_scanlines(img.as_bytes())?;
    let mut writer = started.finish()?;

    writer.flush()?;
    Ok(())
}
