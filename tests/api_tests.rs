use chatbot_web::config::StaticFiles;
use chatbot_web::message::{ChatResponse, ErrorBody};
use chatbot_web::routes::create_router;
use chatbot_web::services::responder::{Responder, ResponderError};
use chatbot_web::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

fn fixture_site() -> StaticFiles {
    StaticFiles::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site"))
}

fn app_with(state: AppState) -> Router {
    create_router(&fixture_site()).with_state(Arc::new(state))
}

fn predict(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_predict_returns_mocked_answer() {
    let app = app_with(AppState::new(|_: &str| "Hello!".to_string()));

    let response = app.oneshot(predict(r#"{"message": "hi"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = body_bytes(response).await;
    let chat_resp: ChatResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(chat_resp.answer, "Hello!");
    assert_eq!(bytes, br#"{"answer":"Hello!"}"#);
}

#[tokio::test]
async fn test_predict_passes_message_through() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let app = app_with(AppState::new(move |text: &str| {
        recorder.lock().unwrap().push(text.to_string());
        format!("echo: {text}")
    }));

    for message in ["Tell me about Rumtek", "", "  spaced  ", "ཨོཾ་མ་ཎི"] {
        let body = serde_json::json!({ "message": message }).to_string();
        let req = Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(chat_resp.answer, format!("echo: {message}"));
    }

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["Tell me about Rumtek", "", "  spaced  ", "ཨོཾ་མ་ཎི"]
    );
}

#[tokio::test]
async fn test_predict_is_idempotent() {
    let app = app_with(AppState::new(|text: &str| format!("answer to {text}")));

    let first = app.clone().oneshot(predict(r#"{"message": "when to visit?"}"#)).await.unwrap();
    let second = app.oneshot(predict(r#"{"message": "when to visit?"}"#)).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn test_predict_rejects_invalid_json() {
    let app = app_with(AppState::new(|_: &str| -> String { unreachable!("responder must not run") }));

    let response = app.oneshot(predict("not json at all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_predict_rejects_missing_or_null_message() {
    let app = app_with(AppState::new(|_: &str| -> String { unreachable!("responder must not run") }));

    for body in [r#"{}"#, r#"{"text": "hi"}"#, r#"{"message": null}"#, r#"{"message": 42}"#, ""] {
        let response = app.clone().oneshot(predict(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
    }
}

#[tokio::test]
async fn test_predict_rejects_missing_content_type() {
    let app = app_with(AppState::new(|_: &str| "unused".to_string()));

    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .body(Body::from(r#"{"message": "hi"}"#))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

struct FailingResponder;

impl Responder for FailingResponder {
    fn get_response(&self, _text: &str) -> Result<String, ResponderError> {
        Err(ResponderError::Upstream("model exploded".to_string()))
    }
}

#[tokio::test]
async fn test_responder_failure_is_a_generic_server_error() {
    let app = app_with(AppState::new(FailingResponder));

    let response = app.oneshot(predict(r#"{"message": "hi"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorBody = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(error.error, "internal server error");
}

#[tokio::test]
async fn test_panicking_responder_is_a_server_error() {
    let app = app_with(AppState::new(|_: &str| -> String { panic!("inference crashed") }));

    let response = app.oneshot(predict(r#"{"message": "hi"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_predict_get_falls_through_to_static_root() {
    let app = app_with(AppState::new(|_: &str| -> String { unreachable!("responder must not run") }));

    let req = Request::builder().uri("/predict").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = Request::builder()
        .method("PUT")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "hi"}"#))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_predict_get_serves_a_file_named_predict() {
    let root = std::env::temp_dir().join(format!("chatbot-web-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("predict"), "static predict").unwrap();

    let app = create_router(&StaticFiles::without_assets(&root))
        .with_state(Arc::new(AppState::new(|_: &str| "unused".to_string())));

    let req = Request::builder().uri("/predict").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"static predict");

    std::fs::remove_dir_all(root).ok();
}
