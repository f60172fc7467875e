use crate::constants::DEFAULT_QUALITY;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jpeg-squeeze",
    about = "Batch-convert images to compressed JPEG",
    long_about = "jpeg-squeeze converts image files (JPEG, PNG, BMP, TIFF, WebP) into compressed JPEGs \
                  at a chosen quality and reports the size saved for every file and for the whole batch. \
                  Output files are named <name>_compressed.jpg inside the output directory.",
    version,
    after_help = "EXAMPLES:\n  \
    jpeg-squeeze photo.png scan.bmp -o ./compressed\n  \
    jpeg-squeeze ./holiday -o ./compressed -q 70\n  \
    jpeg-squeeze \"./images/*.png\" -o ./out --quiet"
)]
pub struct Args {
    #[arg(
        help = "Image files, directories or glob patterns",
        long_help = "Image files are processed as given. Directories are searched recursively for \
                     .jpg/.jpeg/.png/.bmp/.tiff/.webp files (case-insensitive). \
                     Glob patterns are expanded when the shell has not already done so."
    )]
    pub inputs: Vec<PathBuf>,

    #[arg(
        short = 'o',
        long,
        help = "Output directory (must already exist)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "JPEG quality (1-100, default: 85)",
        long_help = "JPEG quality from 1 (smallest file) to 100 (best quality). \
                     The same quality is used for every file in the batch."
    )]
    pub quality: u8,

    #[arg(long, conflicts_with = "verbose", help = "Only print failures and the final summary")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print debug logging to stderr")]
    pub verbose: bool,
}
