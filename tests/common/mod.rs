#![allow(dead_code)]

//! Shared helpers for the integration suites: scratch directories under the
//! system temp dir and generated test images.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Fresh scratch directory for one test, wiped from any previous run.
pub fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "image-converter-test-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a gradient RGB PNG of the given size.
pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        *pixel = Rgb([r, g, 128]);
    }
    DynamicImage::ImageRgb8(img).save(path).unwrap();
}

/// Write an RGBA PNG with a uniform alpha value.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, alpha: u8) {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, alpha]));
    DynamicImage::ImageRgba8(img).save(path).unwrap();
}

/// Write an RGB JPEG of the given size.
pub fn write_rgb_jpg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, Rgb([60, 120, 180]));
    DynamicImage::ImageRgb8(img).save(path).unwrap();
}
