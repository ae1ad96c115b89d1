use std::io::Cursor;

use cihui_core::OcrError;
use image::{DynamicImage, ImageFormat};

/// Decode an uploaded screenshot. Only PNG and JPEG are accepted.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, OcrError> {
    let format = image::guess_format(bytes)
        .map_err(|e| OcrError::Decode(format!("Unrecognized image data: {e}")))?;

    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(OcrError::Decode(format!(
            "Unsupported image format {format:?} (expected PNG or JPEG)"
        )));
    }

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| OcrError::Decode(format!("Failed to decode {format:?}: {e}")))
}

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| OcrError::Engine(format!("Failed to encode PNG: {e}")))?;
    Ok(buffer.into_inner())
}
