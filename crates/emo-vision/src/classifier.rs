//! ONNX Runtime wrapper for the pre-trained emotion classifier.

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array4;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::{Tensor, Value};

use emo_models::{EmotionDistribution, EmotionLabel};

use crate::error::{VisionError, VisionResult};

/// Emotion classifier: one normalized 48x48x1 tile in, a softmax
/// distribution over the seven labels out.
///
/// The model is fixed at load time; there are no request-time parameters and
/// no online learning. The final layer is a softmax, so the output is taken
/// as probabilities directly.
pub struct EmotionClassifier {
    session: Mutex<Session>,
}

impl EmotionClassifier {
    /// Load the classifier model from disk.
    pub fn load(model_path: &Path) -> VisionResult<Self> {
        if !model_path.exists() {
            return Err(VisionError::ModelNotFound(model_path.to_path_buf()));
        }

        let model_bytes = std::fs::read(model_path)?;

        let session = Session::builder()
            .map_err(|e| VisionError::ModelLoad(format!("ORT session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| VisionError::ModelLoad(format!("ORT opt level: {e}")))?
            .commit_from_memory(model_bytes.as_slice())
            .map_err(|e| VisionError::ModelLoad(format!("ORT load model: {e}")))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }

    /// Run one tile through the model.
    pub fn classify(&self, tile: &Array4<f32>) -> VisionResult<EmotionDistribution> {
        let shape: Vec<usize> = tile.shape().to_vec();
        let data = tile.iter().copied().collect::<Vec<f32>>().into_boxed_slice();

        let tensor = Tensor::from_array((shape, data))
            .map(Value::from)
            .map_err(|e| VisionError::inference_failed(format!("ORT tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| VisionError::inference_failed("ORT session poisoned"))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| VisionError::inference_failed(format!("ORT run failed: {e}")))?;

        // Keras exports name the output after the final layer; take the
        // first (only) output rather than hardcoding that name.
        let (_, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| VisionError::inference_failed("ORT returned no outputs"))?;

        let (out_shape, scores) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| VisionError::inference_failed(format!("ORT extract: {e}")))?;

        // Expect (1, 7) or (7,); handle both.
        let valid_shape = match out_shape.len() {
            2 => out_shape[0] == 1 && out_shape[1] as usize == EmotionLabel::COUNT,
            1 => out_shape[0] as usize == EmotionLabel::COUNT,
            _ => false,
        };
        if !valid_shape {
            return Err(VisionError::inference_failed(format!(
                "unexpected classifier output shape: {:?}",
                out_shape
            )));
        }

        EmotionDistribution::from_slice(&scores[..EmotionLabel::COUNT]).ok_or_else(|| {
            VisionError::inference_failed("classifier output missing class scores")
        })
    }
}
