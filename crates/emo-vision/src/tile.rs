//! Region normalization: crop, resize, rescale into classifier input shape.

use ndarray::Array4;
use opencv::core::{Mat, Rect, Size};
use opencv::imgproc;
use opencv::prelude::*;

use emo_models::FaceRegion;

use crate::error::{VisionError, VisionResult};

/// Side length of the square tile the classifier consumes.
pub const TILE_SIZE: usize = 48;

/// Normalize one detected region into a `(1, 48, 48, 1)` tile.
///
/// Crops the grayscale buffer to the region, resizes with area interpolation
/// to exactly 48x48, and rescales pixel intensities to `[0, 1]`. The locator
/// is contracted to produce in-bounds rectangles, so an out-of-bounds crop
/// surfaces as a normalization failure rather than being clamped here.
pub fn normalize_region(gray: &Mat, region: &FaceRegion) -> VisionResult<Array4<f32>> {
    let rect = Rect::new(region.x, region.y, region.width, region.height);

    let roi = Mat::roi(gray, rect)
        .map_err(|e| VisionError::normalize_failed(format!("crop {:?}: {e}", region.bbox())))?;

    let mut resized = Mat::default();
    imgproc::resize(
        &roi,
        &mut resized,
        Size::new(TILE_SIZE as i32, TILE_SIZE as i32),
        0.0,
        0.0,
        imgproc::INTER_AREA,
    )
    .map_err(|e| VisionError::normalize_failed(format!("resize: {e}")))?;

    // resize output is continuous, so the raw bytes are row-major HxW
    let data = resized
        .data_typed::<u8>()
        .map_err(|e| VisionError::normalize_failed(format!("tile data: {e}")))?;

    let pixels: Vec<f32> = data.iter().map(|&p| p as f32 / 255.0).collect();

    Array4::from_shape_vec((1, TILE_SIZE, TILE_SIZE, 1), pixels)
        .map_err(|e| VisionError::normalize_failed(format!("tile shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_gradient(width: i32, height: i32) -> Mat {
        let pixels: Vec<u8> = (0..width * height).map(|i| (i % 256) as u8).collect();
        let mat = Mat::from_slice(&pixels).unwrap();
        let mat = mat.reshape(1, height).unwrap();
        mat.try_clone().unwrap()
    }

    #[test]
    fn tile_has_model_input_shape() {
        let gray = gray_gradient(120, 90);
        let tile = normalize_region(&gray, &FaceRegion::new(10, 10, 64, 64)).unwrap();
        assert_eq!(tile.dim(), (1, TILE_SIZE, TILE_SIZE, 1));
    }

    #[test]
    fn tile_values_are_unit_scaled() {
        let gray = gray_gradient(100, 100);
        let tile = normalize_region(&gray, &FaceRegion::new(0, 0, 100, 100)).unwrap();
        assert!(tile.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn normalization_is_deterministic() {
        let gray = gray_gradient(80, 80);
        let region = FaceRegion::new(5, 5, 48, 48);
        let first = normalize_region(&gray, &region).unwrap();
        let second = normalize_region(&gray, &region).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_bounds_region_is_rejected() {
        let gray = gray_gradient(50, 50);
        let err = normalize_region(&gray, &FaceRegion::new(40, 40, 30, 30)).unwrap_err();
        assert!(matches!(err, VisionError::NormalizeFailed(_)));
    }
}
