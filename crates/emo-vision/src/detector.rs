//! Haar cascade face locator.
//!
//! A classical staged detector scanning sliding windows across an image
//! pyramid; not a neural network. Detection runs on the grayscale buffer and
//! returns regions in detector order, unsorted. An empty result is the
//! no-face case, not a failure.

use std::path::Path;
use std::sync::Mutex;

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::{self, CascadeClassifier};
use opencv::prelude::*;
use tracing::debug;

use emo_models::FaceRegion;

use crate::error::{VisionError, VisionResult};

/// Pyramid scale step between detection passes.
pub const SCALE_FACTOR: f64 = 1.1;

/// Minimum neighboring detections required to keep a candidate window.
pub const MIN_NEIGHBORS: i32 = 5;

/// Smallest detectable face, in pixels.
pub const MIN_FACE_SIZE: i32 = 30;

/// Face locator backed by an OpenCV Haar cascade.
///
/// `detect_multi_scale` needs `&mut` access to the classifier, so the handle
/// sits behind a `Mutex`; the cascade itself is read-only after load.
pub struct FaceLocator {
    classifier: Mutex<CascadeClassifier>,
}

impl FaceLocator {
    /// Load the cascade definition from disk.
    pub fn load(cascade_path: &Path) -> VisionResult<Self> {
        if !cascade_path.exists() {
            return Err(VisionError::ModelNotFound(cascade_path.to_path_buf()));
        }

        let classifier = CascadeClassifier::new(&cascade_path.to_string_lossy())
            .map_err(|e| VisionError::CascadeLoad(format!("cascade load: {e}")))?;

        let empty = classifier
            .empty()
            .map_err(|e| VisionError::CascadeLoad(format!("cascade state: {e}")))?;
        if empty {
            return Err(VisionError::CascadeLoad(format!(
                "no cascade stages in {}",
                cascade_path.display()
            )));
        }

        Ok(Self {
            classifier: Mutex::new(classifier),
        })
    }

    /// Scan a grayscale buffer for faces.
    pub fn detect(&self, gray: &Mat) -> VisionResult<Vec<FaceRegion>> {
        let mut faces = Vector::<Rect>::new();

        let mut classifier = self
            .classifier
            .lock()
            .map_err(|_| VisionError::detection_failed("cascade lock poisoned"))?;

        classifier
            .detect_multi_scale(
                gray,
                &mut faces,
                SCALE_FACTOR,
                MIN_NEIGHBORS,
                objdetect::CASCADE_SCALE_IMAGE,
                Size::new(MIN_FACE_SIZE, MIN_FACE_SIZE),
                Size::new(0, 0), // no upper bound
            )
            .map_err(|e| VisionError::detection_failed(format!("detect_multi_scale: {e}")))?;

        let regions: Vec<FaceRegion> = faces
            .iter()
            .map(|r| FaceRegion::new(r.x, r.y, r.width, r.height))
            .collect();

        debug!(faces = regions.len(), "cascade pass complete");
        Ok(regions)
    }
}
