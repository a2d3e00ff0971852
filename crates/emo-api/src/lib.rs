//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `POST /predict_emotion` inference endpoint
//! - Health probes and optional Prometheus metrics
//! - CORS, request IDs, request logging, body size limits

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
