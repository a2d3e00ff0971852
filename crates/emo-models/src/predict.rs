//! Request/response schemas for the prediction endpoint.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::distribution::EmotionDistribution;
use crate::label::EmotionLabel;
use crate::region::FaceRegion;

/// Body of `POST /predict_emotion`.
///
/// `image` is a base64-encoded image, optionally carrying a
/// `data:image/...;base64,` prefix. A missing or `null` value is a client
/// error, reported as such by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PredictRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// One classified face: bounding box, dominant label, full distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FacePrediction {
    /// `[x, y, w, h]` in source-image pixel coordinates
    pub bbox: [i32; 4],
    /// Label with the highest probability
    pub dominant_emotion: EmotionLabel,
    /// Probability per label, keyed in class index order
    pub emotion_scores: BTreeMap<EmotionLabel, f32>,
}

impl FacePrediction {
    /// Build a prediction entry from a detected region and its distribution.
    pub fn new(region: FaceRegion, distribution: &EmotionDistribution) -> Self {
        Self {
            bbox: region.bbox(),
            dominant_emotion: distribution.dominant(),
            emotion_scores: distribution.to_scores(),
        }
    }
}

/// One entry of the `predictions` array.
///
/// When no face is detected the response carries a single message entry
/// rather than an empty list; callers must handle both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Prediction {
    Face(FacePrediction),
    NoFace { message: String },
}

impl Prediction {
    pub const NO_FACE_MESSAGE: &'static str = "No face detected";

    /// The placeholder entry emitted when the locator found no faces.
    pub fn no_face() -> Self {
        Prediction::NoFace {
            message: Self::NO_FACE_MESSAGE.to_string(),
        }
    }

    /// Assemble the wire-level predictions list: one entry per face, or the
    /// single no-face placeholder when the list is empty.
    pub fn from_faces(faces: Vec<FacePrediction>) -> Vec<Prediction> {
        if faces.is_empty() {
            vec![Prediction::no_face()]
        } else {
            faces.into_iter().map(Prediction::Face).collect()
        }
    }
}

/// Top-level body of a successful prediction response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PredictResponse {
    pub success: bool,
    pub predictions: Vec<Prediction>,
}

impl PredictResponse {
    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self {
            success: true,
            predictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn happy_distribution() -> EmotionDistribution {
        EmotionDistribution::new([0.05, 0.05, 0.1, 0.6, 0.1, 0.05, 0.05])
    }

    #[test]
    fn request_image_defaults_to_none() {
        let req: PredictRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image.is_none());

        let req: PredictRequest = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert!(req.image.is_none());

        let req: PredictRequest = serde_json::from_str(r#"{"image": "abcd"}"#).unwrap();
        assert_eq!(req.image.as_deref(), Some("abcd"));
    }

    #[test]
    fn face_prediction_wire_shape() {
        let prediction =
            FacePrediction::new(FaceRegion::new(10, 20, 30, 40), &happy_distribution());
        let value = serde_json::to_value(&prediction).unwrap();

        assert_eq!(value["bbox"], serde_json::json!([10, 20, 30, 40]));
        assert_eq!(value["dominant_emotion"], "Happy");

        let scores = value["emotion_scores"].as_object().unwrap();
        assert_eq!(scores.len(), EmotionLabel::COUNT);
        assert!(scores.contains_key("Angry"));
        assert!(scores.contains_key("Neutral"));
    }

    #[test]
    fn no_face_entry_is_a_message_object() {
        let entries = Prediction::from_faces(vec![]);
        assert_eq!(entries.len(), 1);

        let value = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(value, serde_json::json!({"message": "No face detected"}));
    }

    #[test]
    fn from_faces_keeps_detector_order() {
        let first = FacePrediction::new(FaceRegion::new(1, 1, 10, 10), &happy_distribution());
        let second = FacePrediction::new(FaceRegion::new(50, 1, 10, 10), &happy_distribution());
        let entries = Prediction::from_faces(vec![first.clone(), second.clone()]);

        assert_eq!(entries, vec![Prediction::Face(first), Prediction::Face(second)]);
    }

    #[test]
    fn response_top_level_shape() {
        let response = PredictResponse::new(Prediction::from_faces(vec![]));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert!(value["predictions"].is_array());
        assert_eq!(value["predictions"].as_array().unwrap().len(), 1);
    }
}
