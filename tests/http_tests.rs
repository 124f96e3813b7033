//! JSON API tests driven through the axum router

use std::sync::Arc;

use agri_qa::data::DataStore;
use agri_qa::http_server::HttpServer;
use agri_qa::qa::QaSystem;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let qa = QaSystem::new(Arc::new(DataStore::seeded())).unwrap();
    HttpServer::new(Arc::new(qa)).router()
}

fn ask(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_ask_top_crops() {
    let response = app()
        .oneshot(ask(r#"{"question": "Top 2 crops in Punjab"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["data"][0]["crop"], "Wheat");
    assert_eq!(body["data"][0]["production"], 5400.0);
    assert_eq!(body["data"][1]["crop"], "Rice");
    assert_eq!(body["sources"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ask_rainfall_uses_string_year_keys() {
    let response = app()
        .oneshot(ask(
            r#"{"question": "Compare rainfall in Maharashtra and Punjab"}"#,
        ))
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["data"][0]["state"], "Maharashtra");
    assert_eq!(body["data"][0]["yearly"]["2020"], 1150.0);
    assert_eq!(body["data"][1]["average"], 687.5);
}

#[tokio::test]
async fn test_ask_unparseable_has_no_data() {
    let response = app()
        .oneshot(ask(r#"{"question": "hello there"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body["answer"],
        "I couldn't understand your question. Please try rephrasing."
    );
    assert!(body.get("data").is_none());
    assert_eq!(body["sources"], serde_json::json!([]));
}

#[tokio::test]
async fn test_ask_without_question() {
    for payload in [r#"{}"#, r#"{"question": ""}"#, r#"{"question": null}"#] {
        let response = app().oneshot(ask(payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "No question provided");
    }
}

#[tokio::test]
async fn test_sample_questions() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/sample-questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    assert!(questions[1].as_str().unwrap().contains("top 3"));
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["system"], "Agricultural Q&A System");
}

#[tokio::test]
async fn test_permissive_cors() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
