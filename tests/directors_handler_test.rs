//! Integration tests for director handler routes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use serde_json::json;
use tower::util::ServiceExt;

use movie_catalog::db::entities::{director, movie};
use movie_catalog::handlers;
use movie_catalog::handlers::directors::DirectorResponse;
use movie_catalog::state::AppState;
use movie_catalog::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::create_router(state.clone())
}

async fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_directors() {
    let state = setup_test_app_state().await;
    let nolan = create_test_director(&state.db, "Christopher Nolan").await;
    let mann = create_test_director(&state.db, "Michael Mann").await;
    let app = create_test_router(&state);

    let response = app.oneshot(empty_request("GET", "/directors/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<DirectorResponse> = parse_json_response(response).await;
    assert_eq!(
        body,
        vec![DirectorResponse::from(nolan), DirectorResponse::from(mann)]
    );
}

#[tokio::test]
async fn test_get_director() {
    let state = setup_test_app_state().await;
    let nolan = create_test_director(&state.db, "Christopher Nolan").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("GET", &format!("/directors/{}", nolan.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body, json!({ "id": nolan.id, "name": "Christopher Nolan" }));
}

#[tokio::test]
async fn test_get_director_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("GET", "/directors/404"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "Director with the requested id not found");
}

#[tokio::test]
async fn test_create_director() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request("POST", "/directors/", json!({ "name": "Nolan" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["message"], "New director added to the catalog");

    let id = body["id"].as_i64().unwrap() as i32;
    let stored = director::Entity::find_by_id(id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Nolan");
}

#[tokio::test]
async fn test_create_director_duplicate_name() {
    let state = setup_test_app_state().await;
    create_test_director(&state.db, "Nolan").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request("POST", "/directors/", json!({ "name": "Nolan" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "conflict");
    assert_eq!(body["error"], "A director named \"Nolan\" is already in the catalog");
}

#[tokio::test]
async fn test_create_director_missing_name() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request("POST", "/directors/", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["error"], "Field 'name' is required");
}

#[tokio::test]
async fn test_create_director_name_too_long() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "POST",
            "/directors/",
            json!({ "name": "n".repeat(256) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["error"], "Field 'name' must be at most 255 characters");
}

#[tokio::test]
async fn test_delete_director_non_numeric_id() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("DELETE", "/directors/nolan"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn test_create_director_missing_content_type() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/directors/")
                .body(Body::from(r#"{"name":"Nolan"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body: serde_json::Value = parse_json_response(response).await;
    assert_eq!(body["kind"], "validation");
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_director() {
    let state = setup_test_app_state().await;
    let director = create_test_director(&state.db, "Nolan").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/directors/{}", director.id),
            json!({ "name": "Christopher Nolan" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = director::Entity::find_by_id(director.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Christopher Nolan");
}

#[tokio::test]
async fn test_update_director_skips_duplicate_check() {
    let state = setup_test_app_state().await;
    create_test_director(&state.db, "Nolan").await;
    let mann = create_test_director(&state.db, "Mann").await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/directors/{}", mann.id),
            json!({ "name": "Nolan" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_director_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(json_request("PUT", "/directors/12", json!({ "name": "Nolan" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_director_leaves_movie_reference() {
    let state = setup_test_app_state().await;
    let nolan = create_test_director(&state.db, "Nolan").await;
    let memento = create_test_movie(&state.db, "Memento", Some(nolan.id), None).await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/directors/{}", nolan.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(director::Entity::find_by_id(nolan.id)
        .one(&state.db)
        .await
        .unwrap()
        .is_none());

    let stored = movie::Entity::find_by_id(memento.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.director_id, Some(nolan.id));
}

#[tokio::test]
async fn test_delete_director_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(empty_request("DELETE", "/directors/3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
