//! Single-file conversion pipeline: decode, normalize color mode, optional
//! resize, encode.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Rgba, RgbaImage};
use tracing::debug;

use crate::core::{ConversionRequest, ConversionResult, OutputFormat};
use crate::utils::{ConvertError, ConvertResult};

/// Fixed encode quality for JPEG outputs.
const JPEG_QUALITY: u8 = 95;

/// Convert a single image file and write the result into the request's
/// output directory, overwriting any existing file of the same name.
///
/// The output directory must already exist (see
/// [`crate::utils::ensure_output_directory`]); a failure mid-encode may leave
/// a partial output file behind, which callers must treat as unreliable.
pub fn convert(request: &ConversionRequest) -> ConvertResult<ConversionResult> {
    let source = &request.source_path;

    let reader = ImageReader::open(source)
        .map_err(|e| ConvertError::decode(source, e))?
        .with_guessed_format()
        .map_err(|e| ConvertError::decode(source, e))?;
    let native_format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| ConvertError::decode(source, e))?;

    let effective_format = match request.output_format {
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::KeepOriginal => native_format.ok_or_else(|| {
            ConvertError::decode(source, "could not determine the source image format")
        })?,
    };

    let img = normalize_color(img, effective_format);

    let img = match request.resize_target() {
        Some((width, height)) => {
            debug!(
                "Resizing {} from {}x{} to {}x{}",
                source.display(),
                img.width(),
                img.height(),
                width,
                height
            );
            img.resize_exact(width, height, FilterType::Lanczos3)
        }
        // A partial width/height spec skips resizing entirely.
        None => img,
    };

    let file_name = output_file_name(source, request.output_format, effective_format)?;
    let output_path = request.output_dir.join(file_name);

    encode(&img, &output_path, effective_format)
        .map_err(|e| ConvertError::encode(source, e))?;

    debug!(
        "Converted {} -> {}",
        source.display(),
        output_path.display()
    );

    Ok(ConversionResult { output_path })
}

/// Normalize the color mode for the effective output format.
///
/// Images with an alpha channel headed for JPEG are flattened onto white,
/// since the JPEG encoder rejects alpha. RGB8 and RGBA8 pass through
/// otherwise (PNG output preserves alpha); everything else is converted to
/// RGB8, dropping modes like grayscale-with-transparency.
fn normalize_color(img: DynamicImage, output_format: ImageFormat) -> DynamicImage {
    if img.color().has_alpha() && output_format == ImageFormat::Jpeg {
        return flatten_onto_white(&img);
    }

    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Composite an image onto an opaque white background of the same pixel
/// dimensions, using its own alpha channel as the mask.
fn flatten_onto_white(img: &DynamicImage) -> DynamicImage {
    let mut background =
        RgbaImage::from_pixel(img.width(), img.height(), Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut background, &img.to_rgba8(), 0, 0);
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(background).to_rgb8())
}

/// Compute the output file name from the source base name.
///
/// An explicit format directive replaces the extension; `KeepOriginal` keeps
/// the source extension (falling back to the decoded format's primary one)
/// and appends a `_resized` suffix so the output never shadows the input.
fn output_file_name(
    source: &Path,
    directive: OutputFormat,
    native_format: ImageFormat,
) -> ConvertResult<String> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::encode(source, "source file has no usable base name"))?;

    Ok(match directive.extension() {
        Some(ext) => format!("{stem}.{ext}"),
        None => {
            let ext = source
                .extension()
                .and_then(|e| e.to_str())
                .or_else(|| native_format.extensions_str().first().copied())
                .unwrap_or("img");
            format!("{stem}_resized.{ext}")
        }
    })
}

fn encode(img: &DynamicImage, output_path: &Path, format: ImageFormat) -> Result<(), ImageError> {
    match format {
        ImageFormat::Jpeg => {
            let file = File::create(output_path).map_err(ImageError::IoError)?;
            let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
            // Always RGB8 here: alpha was flattened during normalization.
            encoder.encode_image(&img.to_rgb8())
        }
        other => img.save_with_format(output_path, other),
    }
}
