//! Emotion prediction handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::warn;

use emo_models::{PredictRequest, PredictResponse, Prediction};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// `POST /predict_emotion`
///
/// Accepts `{"image": "<base64 or data-URI string>"}` and returns one
/// prediction entry per detected face, or the single no-face placeholder.
/// The pipeline is CPU-bound and synchronous, so it runs on the blocking
/// pool; the artifacts themselves serialize access internally.
pub async fn predict_emotion(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let image = request.image.ok_or(ApiError::MissingImage)?;

    let engine = Arc::clone(&state.engine);
    let faces = tokio::task::spawn_blocking(move || engine.analyze(&image))
        .await
        .map_err(|e| ApiError::internal(format!("inference task failed: {e}")))?
        .map_err(|e| {
            warn!(error = %e, "prediction failed");
            ApiError::from(e)
        })?;

    metrics::record_prediction(faces.len());

    Ok(Json(PredictResponse::new(Prediction::from_faces(faces))))
}
