//! Image decoding and normalization.

use image::imageops::FilterType;
use tracing::debug;

use super::ImageTensor;
use crate::error::ClassifyError;

/// Fixed model input resolution. The reference classifier was trained on
/// 30x30 RGB crops with raw 0-255 channel values, so no mean/std
/// normalization is applied here.
pub const MODEL_INPUT_WIDTH: u32 = 30;
pub const MODEL_INPUT_HEIGHT: u32 = 30;

/// Decodes uploaded image bytes and produces the model input tensor.
///
/// Accepts any encoding the `image` crate can sniff, strips alpha/palette by
/// converting to RGB8 and resizes (non-aspect-preserving) to the model
/// resolution. No side effects.
pub fn image_to_tensor(bytes: &[u8]) -> Result<ImageTensor, ClassifyError> {
    if let Some(kind) = infer::get(bytes) {
        debug!("Decoding uploaded image ({})", kind.mime_type());
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|err| ClassifyError::Decode(err.to_string()))?;

    let resized = decoded
        .resize_exact(MODEL_INPUT_WIDTH, MODEL_INPUT_HEIGHT, FilterType::Triangle)
        .to_rgb8();

    let mut tensor = ImageTensor::zeros((
        1,
        MODEL_INPUT_HEIGHT as usize,
        MODEL_INPUT_WIDTH as usize,
        3,
    ));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for channel in 0..3 {
            tensor[[0, y as usize, x as usize, channel]] = pixel.0[channel] as f32;
        }
    }

    Ok(tensor)
}
