//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use emo_vision::VisionError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body carried no `image` value.
    #[error("No image data provided")]
    MissingImage,

    /// The payload was not valid base64 or not a decodable image.
    #[error("Invalid image data")]
    InvalidImage,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImage | ApiError::InvalidImage => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<VisionError> for ApiError {
    fn from(err: VisionError) -> Self {
        if err.is_client_error() {
            ApiError::InvalidImage
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let error = match &self {
            ApiError::Internal(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { error };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_image_body_matches_contract() {
        let response = ApiError::MissingImage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "No image data provided"})
        );
    }

    #[tokio::test]
    async fn invalid_image_body_matches_contract() {
        let response = ApiError::InvalidImage.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid image data"})
        );
    }

    #[tokio::test]
    async fn decode_failures_map_to_invalid_image() {
        let err: ApiError = VisionError::decode_failed("bad payload").into();
        assert!(matches!(err, ApiError::InvalidImage));

        let err: ApiError = VisionError::inference_failed("model exploded").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
