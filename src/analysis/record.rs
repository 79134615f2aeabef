//! Per-file metadata extraction.
//!
//! Only the image header is decoded: dimensions, color type and the container
//! format. The file handle lives inside the reader and is dropped before
//! `read_image_record` returns, whether decoding succeeded or not.

use image::{ColorType, ImageDecoder, ImageError, ImageFormat, ImageReader};
use std::path::Path;
use thiserror::Error;

use crate::utils::display_name;

/// Reasons a candidate file is excluded from the analysis
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),

    #[error("unrecognized image format")]
    UnknownFormat,

    #[error("{0}")]
    Decode(#[from] ImageError),

    #[error("image reports empty dimensions {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
}

/// One successfully read image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    /// width / height
    pub aspect_ratio: f64,
    /// Container format name, e.g. "JPEG"
    pub format: String,
    /// Pixel layout name, e.g. "RGB"
    pub color_mode: String,
}

impl ImageRecord {
    /// Build a record, rejecting zero-sized images so that `aspect_ratio` is
    /// always finite and positive.
    pub fn new(
        filename: impl Into<String>,
        width: u32,
        height: u32,
        format: impl Into<String>,
        color_mode: impl Into<String>,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyDimensions { width, height });
        }

        Ok(Self {
            filename: filename.into(),
            width,
            height,
            aspect_ratio: width as f64 / height as f64,
            format: format.into(),
            color_mode: color_mode.into(),
        })
    }
}

/// Read the header of `path` and build its record
pub fn read_image_record(path: &Path) -> Result<ImageRecord, DecodeError> {
    // Content sniffing first, the extension is only a fallback
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format().ok_or(DecodeError::UnknownFormat)?;

    let decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    let color_type = decoder.color_type();

    ImageRecord::new(
        display_name(path),
        width,
        height,
        format_name(format),
        color_mode_name(color_type),
    )
}

/// Conventional upper-case name of an image container format
pub fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

/// Short pixel layout name ("L", "RGB", "RGBA;16", ...)
pub fn color_mode_name(color_type: ColorType) -> String {
    match color_type {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;F32",
        ColorType::Rgba32F => "RGBA;F32",
        _ => return format!("{:?}", color_type).to_uppercase(),
    }
    .to_string()
}
