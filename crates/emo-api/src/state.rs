//! Application state.

use std::sync::Arc;

use emo_vision::{EmotionEngine, VisionError};

use crate::config::ApiConfig;

/// Shared application state.
///
/// The engine holds the two startup artifacts (cascade + classifier),
/// loaded once and read-only for the process lifetime. It is never
/// re-initialized per request.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: Arc<EmotionEngine>,
}

impl AppState {
    /// Create new application state, loading both inference artifacts.
    ///
    /// A missing or unreadable artifact is fatal; the caller (process entry
    /// point) is expected to check this result and exit before serving.
    pub fn new(config: ApiConfig) -> Result<Self, VisionError> {
        let engine = EmotionEngine::load(&config.cascade_path, &config.model_path)?;

        Ok(Self {
            config,
            engine: Arc::new(engine),
        })
    }
}
