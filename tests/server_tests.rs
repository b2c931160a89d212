use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use courier::deliveries::SampleDeliveries;
use courier::engine::Engine;
use courier::entities::{Coordinates, LocationFix, RouteOptions};
use courier::error::Error;
use courier::location::{
    DynLocationProvider, FixedLocationProvider, LocationProvider, PermissionStatus, WatchOptions,
};
use courier::server::router;

fn depot() -> Coordinates {
    Coordinates::new(10.7769, 106.7009).unwrap()
}

fn app_with(provider: DynLocationProvider) -> Router {
    let engine = Engine::new(
        Arc::new(SampleDeliveries),
        provider,
        RouteOptions::default(),
        WatchOptions::default(),
    )
    .unwrap();

    router(engine)
}

fn app() -> Router {
    app_with(Arc::new(FixedLocationProvider::new(depot()).unwrap()))
}

/// Always grants access but never produces a fix.
struct NoSignal;

#[async_trait]
impl LocationProvider for NoSignal {
    async fn request_permission(&self) -> Result<PermissionStatus, Error> {
        Ok(PermissionStatus::Granted)
    }

    async fn current_position(&self) -> Result<LocationFix, Error> {
        Err(Error::LocationUnavailable("no satellites in view".into()))
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_route() -> Value {
    json!({
        "origin": {"latitude": 10.7769, "longitude": 106.7009},
        "destination": {"latitude": 10.7731, "longitude": 106.6989},
    })
}

#[tokio::test]
async fn estimate_falls_back_to_engine_defaults() {
    let (status, body) = send(&app(), post_json("/routes/estimate", sample_route())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"].as_array().map(Vec::len), Some(51));
    assert_eq!(body["path"][50], json!({"latitude": 10.7731, "longitude": 106.6989}));
    assert_eq!(body["distance_label"], "0.48 km");
    assert_eq!(body["duration_minutes"], 1);
    assert_eq!(body["duration_label"], "1 min");
}

#[tokio::test]
async fn estimate_honours_request_options() {
    let mut params = sample_route();
    params["options"] = json!({"steps": 4});

    let (status, body) = send(&app(), post_json("/routes/estimate", params)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn estimate_rejects_negative_steps() {
    let mut params = sample_route();
    params["options"] = json!({"steps": -1, "average_speed_kmh": 30.0});

    let (status, body) = send(&app(), post_json("/routes/estimate", params)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 102);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid configuration"));
}

#[tokio::test]
async fn estimate_rejects_out_of_range_coordinates() {
    let mut params = sample_route();
    params["destination"] = json!({"latitude": 91.0, "longitude": 0.0});

    let (status, body) = send(&app(), post_json("/routes/estimate", params)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 101);
}

#[tokio::test]
async fn lists_and_finds_delivery_points() {
    let app = app();

    let (status, body) = send(&app, get("/deliveries")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (status, body) = send(&app, get("/deliveries/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Order #002");

    let (status, body) = send(&app, get("/deliveries/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"code": 104, "error": "delivery point not found: 42"}));
}

#[tokio::test]
async fn selecting_needs_a_known_location() {
    let app = app();

    let (status, body) = send(&app, request("POST", "/deliveries/2/select")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 105);

    let (status, body) = send(&app, request("POST", "/location")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["coordinates"]["latitude"], 10.7769);

    let (status, body) = send(&app, request("POST", "/deliveries/2/select")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["point"]["id"], "2");
    assert_eq!(body["estimate"]["duration_label"], "1 min");

    let (_, scene) = send(&app, get("/scene")).await;
    assert_eq!(scene["markers"].as_array().map(Vec::len), Some(4));
    assert_eq!(scene["polyline"].as_array().map(Vec::len), Some(51));

    let (status, body) = send(&app, request("DELETE", "/selection")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["point"]["id"], "2");

    let (_, body) = send(&app, get("/selection")).await;
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn denied_permission_is_forbidden() {
    let provider = FixedLocationProvider::new(depot())
        .unwrap()
        .with_permission(PermissionStatus::Denied);
    let app = app_with(Arc::new(provider));

    let (status, body) = send(&app, request("POST", "/location")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 103);

    let (status, body) = send(&app, request("PATCH", "/location/tracking/start")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 103);
}

#[tokio::test]
async fn unavailable_location_hides_internal_detail() {
    let app = app_with(Arc::new(NoSignal));

    let (status, body) = send(&app, request("POST", "/location")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"code": 4, "error": "Internal Server Error"}));
}

#[tokio::test]
async fn tracking_can_be_started_and_stopped() {
    let app = app();

    let (_, body) = send(&app, get("/location/tracking")).await;
    assert_eq!(body, json!({"state": "inactive"}));

    let (status, body) = send(&app, request("PATCH", "/location/tracking/start")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"state": "active"}));

    let (_, body) = send(&app, get("/location/tracking")).await;
    assert_eq!(body, json!({"state": "active"}));

    let (_, body) = send(&app, request("PATCH", "/location/tracking/stop")).await;
    assert_eq!(body, json!({"state": "inactive"}));

    let (_, body) = send(&app, get("/location/tracking")).await;
    assert_eq!(body, json!({"state": "inactive"}));
}
