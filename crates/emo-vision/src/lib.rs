//! Face detection and emotion inference pipeline.
//!
//! This crate provides:
//! - Base64/data-URI image payload decoding
//! - Haar cascade face detection (OpenCV `objdetect`)
//! - Face tile normalization for the classifier input
//! - ONNX Runtime inference for the seven-class emotion model

pub mod classifier;
pub mod decode;
pub mod detector;
pub mod engine;
pub mod error;
pub mod tile;

pub use classifier::EmotionClassifier;
pub use decode::decode_base64_image;
pub use detector::FaceLocator;
pub use engine::EmotionEngine;
pub use error::{VisionError, VisionResult};
pub use tile::TILE_SIZE;
