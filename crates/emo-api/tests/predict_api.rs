//! API integration tests.
//!
//! The predict tests exercise the full pipeline and need the real inference
//! artifacts on disk (`EMOTION_MODEL_PATH`, `FACE_CASCADE_PATH` or the
//! default `models/` paths), so they are ignored by default.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tower::ServiceExt;

use emo_api::{create_router, ApiConfig, AppState};

fn test_app() -> Router {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env();
    let state = AppState::new(config).expect("inference artifacts must be present for this test");
    create_router(state, None)
}

/// A uniform gray image: decodable, but contains no face.
fn blank_image_b64() -> String {
    let img = image::RgbImage::from_pixel(64, 64, image::Rgb([127, 127, 127]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Png,
        )
        .unwrap();
    BASE64.encode(bytes)
}

async fn post_predict(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict_emotion")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn health_endpoint_reports_healthy() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn missing_image_key_is_a_client_error() {
    let (status, body) = post_predict(test_app(), serde_json::json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "No image data provided"}));
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn malformed_base64_is_a_client_error() {
    let (status, body) =
        post_predict(test_app(), serde_json::json!({"image": "not-base64!!"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "Invalid image data"}));
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn faceless_image_yields_single_message_entry() {
    let (status, body) =
        post_predict(test_app(), serde_json::json!({"image": blank_image_b64()})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["predictions"],
        serde_json::json!([{"message": "No face detected"}])
    );
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn data_uri_prefix_does_not_change_predictions() {
    let bare = blank_image_b64();
    let wrapped = format!("data:image/png;base64,{bare}");

    let (_, from_bare) = post_predict(test_app(), serde_json::json!({"image": bare})).await;
    let (_, from_wrapped) = post_predict(test_app(), serde_json::json!({"image": wrapped})).await;

    assert_eq!(from_bare, from_wrapped);
}

#[tokio::test]
#[ignore = "requires emotion model and cascade artifacts"]
async fn identical_payloads_predict_identically() {
    let payload = serde_json::json!({"image": blank_image_b64()});

    let (_, first) = post_predict(test_app(), payload.clone()).await;
    let (_, second) = post_predict(test_app(), payload).await;

    assert_eq!(first, second);
}
