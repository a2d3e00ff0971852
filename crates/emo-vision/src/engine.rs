//! End-to-end inference pipeline: decode, locate, normalize, classify.

use std::path::Path;

use tracing::debug;

use emo_models::FacePrediction;

use crate::classifier::EmotionClassifier;
use crate::decode;
use crate::detector::FaceLocator;
use crate::error::VisionResult;
use crate::tile;

/// The two pre-built artifacts, loaded once at process start and read-only
/// for the process lifetime.
pub struct EmotionEngine {
    locator: FaceLocator,
    classifier: EmotionClassifier,
}

impl EmotionEngine {
    /// Load the cascade definition and the classifier model.
    ///
    /// Either artifact missing or unreadable is a startup failure; there is
    /// no degraded mode.
    pub fn load(cascade_path: &Path, model_path: &Path) -> VisionResult<Self> {
        let locator = FaceLocator::load(cascade_path)?;
        let classifier = EmotionClassifier::load(model_path)?;
        Ok(Self {
            locator,
            classifier,
        })
    }

    /// Run the full pipeline on a base64 image payload.
    ///
    /// Returns one prediction per detected face, in detector order; an empty
    /// vector means no face was found. Each face triggers one independent
    /// classifier invocation.
    pub fn analyze(&self, payload: &str) -> VisionResult<Vec<FacePrediction>> {
        let color = decode::decode_base64_image(payload)?;
        let gray = decode::to_grayscale(&color)?;

        let regions = self.locator.detect(&gray)?;

        let mut predictions = Vec::with_capacity(regions.len());
        for region in regions {
            let face_tile = tile::normalize_region(&gray, &region)?;
            let distribution = self.classifier.classify(&face_tile)?;
            debug!(
                bbox = ?region.bbox(),
                dominant = %distribution.dominant(),
                "face classified"
            );
            predictions.push(FacePrediction::new(region, &distribution));
        }

        Ok(predictions)
    }
}
