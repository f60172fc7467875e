#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_test_output_directory(temp_dir: &Path) -> PathBuf {
    let output_dir = temp_dir.join("output");
    std::fs::create_dir(&output_dir).unwrap();
    output_dir
}

/// Writes a noisy RGB image so the JPEG output is not trivially small.
pub fn write_rgb_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x.wrapping_mul(31) ^ y.wrapping_mul(17)) as u8,
            (x * 3 + y * 5) as u8,
            ((x * y) % 251) as u8,
        ])
    })
    .save(path)
    .unwrap();
}

pub fn write_rgba_image(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 77, ((x + y) % 256) as u8])
    })
    .save(path)
    .unwrap();
}

pub fn write_corrupt_file(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
}

/// A directory with two valid images (one nested), one corrupt image and a
/// non-image file. Returns the directory.
pub fn create_mixed_image_directory(temp_dir: &Path) -> PathBuf {
    let images = temp_dir.join("images");
    let nested = images.join("nested");
    std::fs::create_dir_all(&nested).unwrap();

    write_rgb_image(&images.join("good.png"), 64, 64);
    write_rgba_image(&nested.join("alpha.PNG"), 32, 32);
    write_corrupt_file(&images.join("bad.jpg"));
    File::create(images.join("readme.txt"))
        .unwrap()
        .write_all(b"not an image")
        .unwrap();

    images
}
