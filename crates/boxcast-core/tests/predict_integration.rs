//! End-to-end pipeline tests against a mock weather archive.
//!
//! Each test builds a throwaway deployment in a temp directory: a small
//! reference image, a regression artifact, a fresh cache database, and a
//! config pointing the client at a wiremock server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use chrono::NaiveDate;
use image::{GenericImageView, Rgba, RgbaImage};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxcast_core::{Config, Coordinator, Prediction};
use boxcast_weather::DAILY_FIELDS;

const REF_WIDTH: u32 = 48;
const REF_HEIGHT: u32 = 32;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
}

/// Zero-weight artifact over 13 features whose intercept encodes two fixed
/// boxes, so predictions are independent of the actual weather values.
fn write_artifact(dir: &Path) {
    let artifact = json!({
        "input_width": DAILY_FIELDS.len(),
        "weights": vec![vec![0.0; DAILY_FIELDS.len()]; 8],
        "intercept": [5.0, 5.0, 10.0, 8.0, 20.0, 6.0, 12.0, 9.0],
    });
    std::fs::write(dir.join("regression.json"), artifact.to_string()).unwrap();
}

fn write_reference(dir: &Path) {
    let img = RgbaImage::from_pixel(REF_WIDTH, REF_HEIGHT, Rgba([10, 20, 30, 255]));
    img.save(dir.join("reference.png")).unwrap();
}

fn test_config(dir: &Path, server: &MockServer, box_count: usize) -> Config {
    let mut config = Config::default();
    config.archive.base_url = server.uri();
    // Millisecond backoff keeps the exhausted-retry test fast.
    config.archive.retry_initial_ms = 1;
    config.archive.retry_max_ms = 10;
    config.paths.cache_db = dir.join("cache.db");
    config.paths.model_artifact = dir.join("regression.json");
    config.paths.reference_image = dir.join("reference.png");
    config.paths.output_dir = dir.join("output");
    config.predictor.box_count = box_count;
    config
}

fn daily_payload() -> serde_json::Value {
    let mut daily = serde_json::Map::new();
    daily.insert("time".into(), json!(["2023-06-15"]));
    for (i, field) in DAILY_FIELDS.iter().enumerate() {
        daily.insert((*field).to_string(), json!([i as f64]));
    }
    json!({ "daily": daily })
}

#[tokio::test]
async fn test_full_prediction_end_to_end() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path());
    write_reference(dir.path());

    Mock::given(method("GET"))
        .and(path("/v1/archive"))
        .and(query_param("start_date", "2023-06-15"))
        .and(query_param("end_date", "2023-06-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config(dir.path(), &server, 3)).unwrap();
    let prediction = coordinator.predict(test_date()).await.unwrap();

    assert!(prediction.is_full());
    assert_eq!(prediction.image().dimensions(), (REF_WIDTH, REF_HEIGHT));

    let output = dir.path().join("output").join("annotated.png");
    assert!(output.exists());

    // The first intercept-encoded box (5,5)-(15,13) is outlined in green.
    let pixels = prediction.image().to_rgba8();
    assert_eq!(*pixels.get_pixel(5, 5), Rgba([0, 255, 0, 255]));
    // Deep interior stays at the reference background color.
    assert_eq!(*pixels.get_pixel(30, 25), Rgba([10, 20, 30, 255]));
}

#[tokio::test]
async fn test_unavailable_archive_degrades_to_partial() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path());
    write_reference(dir.path());

    Mock::given(method("GET"))
        .and(path("/v1/archive"))
        .respond_with(ResponseTemplate::new(503))
        .expect(6) // initial attempt + 5 retries
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config(dir.path(), &server, 3)).unwrap();
    let prediction = coordinator.predict(test_date()).await.unwrap();

    assert!(!prediction.is_full());
    assert!(matches!(prediction, Prediction::Partial { .. }));
    assert_eq!(prediction.image().dimensions(), (REF_WIDTH, REF_HEIGHT));
    assert!(dir.path().join("output").join("annotated.png").exists());
}

#[tokio::test]
async fn test_repeat_prediction_hits_cache_once() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path());
    write_reference(dir.path());

    Mock::given(method("GET"))
        .and(path("/v1/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config(dir.path(), &server, 2)).unwrap();
    let first = coordinator.predict(test_date()).await.unwrap();
    let second = coordinator.predict(test_date()).await.unwrap();

    assert!(first.is_full());
    assert!(second.is_full());
}

#[tokio::test]
async fn test_missing_model_artifact_is_fatal() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_reference(dir.path());
    // No artifact written.

    Mock::given(method("GET"))
        .and(path("/v1/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_payload()))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config(dir.path(), &server, 3)).unwrap();
    let result = coordinator.predict(test_date()).await;

    assert!(matches!(result, Err(boxcast_core::AppError::Model(_))));
}

#[tokio::test]
async fn test_missing_reference_image_is_fatal_not_silent() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path());
    // No reference image written.

    Mock::given(method("GET"))
        .and(path("/v1/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(daily_payload()))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(test_config(dir.path(), &server, 3)).unwrap();
    let result = coordinator.predict(test_date()).await;

    assert!(matches!(result, Err(boxcast_core::AppError::Annotate(_))));
    // And no stale output file appears.
    assert!(!dir.path().join("output").join("annotated.png").exists());
}
