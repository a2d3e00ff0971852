//! Error types for the vision pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur while decoding images or running inference.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Model not found: {0}")]
    ModelNotFound(PathBuf),

    #[error("Cascade load failed: {0}")]
    CascadeLoad(String),

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Image decode failed: {0}")]
    DecodeFailed(String),

    #[error("Face detection failed: {0}")]
    DetectionFailed(String),

    #[error("Face region normalization failed: {0}")]
    NormalizeFailed(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisionError {
    /// Create an image decode error.
    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::DecodeFailed(message.into())
    }

    /// Create a detection failure error.
    pub fn detection_failed(message: impl Into<String>) -> Self {
        Self::DetectionFailed(message.into())
    }

    /// Create a normalization failure error.
    pub fn normalize_failed(message: impl Into<String>) -> Self {
        Self::NormalizeFailed(message.into())
    }

    /// Create an inference failure error.
    pub fn inference_failed(message: impl Into<String>) -> Self {
        Self::InferenceFailed(message.into())
    }

    /// Whether this error is the caller's fault (undecodable payload) as
    /// opposed to a pipeline fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, VisionError::DecodeFailed(_))
    }
}
