//! End-to-end walk through the catalog API: duplicate detection, filtered
//! listing and the not-found diagnostics, driven only through HTTP.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::util::ServiceExt;

use movie_catalog::handlers;
use movie_catalog::test_utils::*;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_director_movie_scenario() {
    let state = setup_test_app_state().await;
    let app = handlers::create_router(state);

    let (status, body) = send(&app, post("/directors/", json!({ "name": "Nolan" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let nolan_id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, post("/directors/", json!({ "name": "Nolan" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");

    let (status, _) = send(
        &app,
        post(
            "/movies/",
            json!({ "title": "Inception", "director_id": nolan_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get(&format!("/movies/?director_id={}", nolan_id))).await;
    assert_eq!(status, StatusCode::OK);
    let movies = body.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Inception");
    assert_eq!(movies[0]["director_id"], nolan_id);
    assert_eq!(movies[0]["genre_id"], serde_json::Value::Null);

    let (status, body) = send(&app, get("/movies/?director_id=9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "reference_not_found");

    let (status, body) = send(&app, get("/genres/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = handlers::create_router(state);

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
