//! Integration tests for the single-file conversion pipeline.

mod common;

use std::path::PathBuf;

use image_converter::{
    ConversionRequest, ConvertError, OutputFormat, convert, ensure_output_directory,
};

/// Scratch layout for one test: sources in the base dir, outputs in `out/`.
fn setup(name: &str) -> (PathBuf, PathBuf) {
    let base = common::test_dir(name);
    let out = base.join("out");
    ensure_output_directory(&out).unwrap();
    (base, out)
}

fn request(
    source_path: PathBuf,
    output_dir: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    format: OutputFormat,
) -> ConversionRequest {
    ConversionRequest {
        source_path,
        output_dir,
        target_width: width,
        target_height: height,
        output_format: format,
    }
}

#[test]
fn no_resize_no_format_round_trips_dimensions() {
    let (base, out) = setup("roundtrip");
    let source = base.join("photo.png");
    common::write_rgb_png(&source, 100, 50);

    let result = convert(&request(source, out.clone(), None, None, OutputFormat::KeepOriginal))
        .unwrap();

    assert_eq!(result.output_path, out.join("photo_resized.png"));
    let img = image::open(&result.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (100, 50));
}

#[test]
fn resize_is_exact_regardless_of_aspect_ratio() {
    let (base, out) = setup("exact-resize");
    let source = base.join("wide.png");
    common::write_rgb_png(&source, 100, 50);

    let result = convert(&request(source, out.clone(), Some(16), Some(16), OutputFormat::Png))
        .unwrap();

    assert_eq!(result.output_path, out.join("wide.png"));
    let img = image::open(&result.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (16, 16));
}

#[test]
fn single_dimension_skips_resize() {
    let (base, out) = setup("partial-resize");
    let source = base.join("photo.png");
    common::write_rgb_png(&source, 100, 50);

    let result =
        convert(&request(source, out, Some(16), None, OutputFormat::Png)).unwrap();

    let img = image::open(&result.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (100, 50));
}

#[test]
fn rgba_to_jpeg_flattens_alpha_onto_white() {
    let (base, out) = setup("flatten");
    let source = base.join("transparent.png");
    common::write_rgba_png(&source, 32, 32, 0);

    let result = convert(&request(source, out.clone(), Some(16), Some(16), OutputFormat::Jpeg))
        .unwrap();

    assert_eq!(result.output_path, out.join("transparent.jpg"));
    let img = image::open(&result.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (16, 16));
    assert!(!img.color().has_alpha());

    // Fully transparent input flattens to white (within JPEG loss).
    let px = img.to_rgb8().get_pixel(8, 8).0;
    assert!(px.iter().all(|&c| c > 240), "expected near-white, got {px:?}");
}

#[test]
fn png_output_preserves_alpha() {
    let (base, out) = setup("preserve-alpha");
    let source = base.join("translucent.png");
    common::write_rgba_png(&source, 8, 8, 128);

    let result =
        convert(&request(source, out, None, None, OutputFormat::Png)).unwrap();

    let img = image::open(&result.output_path).unwrap();
    assert!(img.color().has_alpha());
    assert_eq!(img.to_rgba8().get_pixel(0, 0).0[3], 128);
}

#[test]
fn keep_original_resizes_jpeg_in_source_format() {
    let (base, out) = setup("keep-original");
    let source = base.join("c.jpg");
    common::write_rgb_jpg(&source, 100, 50);

    let result = convert(&request(source, out.clone(), None, None, OutputFormat::KeepOriginal))
        .unwrap();

    assert_eq!(result.output_path, out.join("c_resized.jpg"));
    let img = image::open(&result.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (100, 50));
}

#[test]
fn missing_source_is_a_decode_error() {
    let (base, out) = setup("missing-source");
    let source = base.join("nope.png");

    let err = convert(&request(source.clone(), out, None, None, OutputFormat::Jpeg))
        .unwrap_err();

    assert!(matches!(err, ConvertError::Decode { .. }));
    assert_eq!(err.path().unwrap(), &source);
}

#[test]
fn non_image_source_is_a_decode_error() {
    let (base, out) = setup("not-an-image");
    let source = base.join("fake.png");
    std::fs::write(&source, b"definitely not a png").unwrap();

    let err = convert(&request(source, out, None, None, OutputFormat::Jpeg)).unwrap_err();
    assert!(matches!(err, ConvertError::Decode { .. }));
}

#[test]
fn existing_output_is_overwritten() {
    let (base, out) = setup("overwrite");
    let source = base.join("photo.png");
    common::write_rgb_png(&source, 20, 20);

    let first = convert(&request(
        source.clone(),
        out.clone(),
        None,
        None,
        OutputFormat::Jpeg,
    ))
    .unwrap();
    let second =
        convert(&request(source, out, Some(10), Some(10), OutputFormat::Jpeg)).unwrap();

    // Last writer wins, no uniqueness suffix.
    assert_eq!(first.output_path, second.output_path);
    let img = image::open(&second.output_path).unwrap();
    assert_eq!((img.width(), img.height()), (10, 10));
}

#[test]
fn ensure_output_directory_is_idempotent() {
    let dir = common::test_dir("ensure-dir").join("nested/a/b");
    assert!(!dir.exists());

    ensure_output_directory(&dir).unwrap();
    assert!(dir.is_dir());
    // Second call is a no-op success.
    ensure_output_directory(&dir).unwrap();
}

#[test]
fn ensure_output_directory_rejects_file_collision() {
    let dir = common::test_dir("ensure-collision");
    let collision = dir.join("taken");
    std::fs::write(&collision, b"x").unwrap();

    let err = ensure_output_directory(&collision).unwrap_err();
    assert!(matches!(err, ConvertError::Directory { .. }));
}
