//! Transport-payload decoding: base64 (optionally data-URI wrapped) to a
//! 3-channel pixel buffer, plus the grayscale conversion the detector needs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::RgbImage;
use opencv::core::Mat;
use opencv::imgproc;
use opencv::prelude::*;

use crate::error::{VisionError, VisionResult};

/// Strip a `data:image/...;base64,` style prefix if present.
///
/// Frontends commonly submit canvas captures as data URIs; everything up to
/// and including the `base64,` delimiter is transport framing, not payload.
pub fn strip_data_uri(payload: &str) -> &str {
    match payload.split_once("base64,") {
        Some((_, data)) => data,
        None => payload,
    }
}

/// Decode the (possibly data-URI wrapped) base64 payload to raw bytes.
pub fn decode_base64(payload: &str) -> VisionResult<Vec<u8>> {
    BASE64
        .decode(strip_data_uri(payload))
        .map_err(|e| VisionError::decode_failed(format!("invalid base64: {e}")))
}

/// Decode raw bytes as a raster image and convert to 3-channel RGB.
pub fn decode_image(bytes: &[u8]) -> VisionResult<RgbImage> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| VisionError::decode_failed(format!("unrecognized image data: {e}")))?;
    Ok(image.to_rgb8())
}

/// Convert a decoded RGB image into an owned OpenCV `Mat` (HxWx3, u8).
pub fn rgb_to_mat(image: &RgbImage) -> VisionResult<Mat> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(VisionError::decode_failed("empty image"));
    }

    let mat = Mat::from_slice(image.as_raw())
        .map_err(|e| VisionError::decode_failed(format!("Mat from pixels: {e}")))?;
    let mat = mat
        .reshape(3, height as i32)
        .map_err(|e| VisionError::decode_failed(format!("Mat reshape: {e}")))?;
    // Own the data; the slice-backed Mat borrows the image buffer.
    mat.try_clone()
        .map_err(|e| VisionError::decode_failed(format!("Mat clone: {e}")))
}

/// Full decoder path: base64 payload to a 3-channel RGB `Mat`.
pub fn decode_base64_image(payload: &str) -> VisionResult<Mat> {
    let bytes = decode_base64(payload)?;
    let image = decode_image(&bytes)?;
    rgb_to_mat(&image)
}

/// Single-channel grayscale version of a 3-channel RGB `Mat`.
pub fn to_grayscale(color: &Mat) -> VisionResult<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color_def(color, &mut gray, imgproc::COLOR_RGB2GRAY)
        .map_err(|e| VisionError::decode_failed(format!("grayscale conversion: {e}")))?;
    Ok(gray)
}
