use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use axum::Router;
use hyper::Body;
use reading_inference::api::{app, AppState};
use reading_inference::blanks::count_blanks;
use reading_inference::llm::{CompletionModel, MockModel};
use serde_json::{json, Value};
use tower::ServiceExt;

const EXERCISE_JSON: &str = r#"{"context":"Honeybees live in hives and make honey from nectar. Worker bees collect nectar from flowers and bring it back to the hive.","questionText":"Bees gather ___ from flowers. They store it in the ___. A bee that collects nectar is a ___ bee. Without flowers, bees could not make ___. Hives are ___ for bees. Nectar becomes ___. Worker bees ___ every day. Flowers help bees ___."}"#;

fn app_with(model: Option<Arc<MockModel>>) -> Router {
    let model = model.map(|m| m as Arc<dyn CompletionModel>);
    app(Arc::new(AppState::new(model)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn generate_without_credential_is_configuration_error() {
    let (status, body) = send(app_with(None), get("/generate-example")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.to_lowercase().contains("configuration"));
    assert!(body.get("context").is_none());
}

#[tokio::test]
async fn generate_returns_exercise_from_model() {
    let model = Arc::new(MockModel::fixed(EXERCISE_JSON));
    let (status, body) = send(app_with(Some(model.clone())), get("/generate-example")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["context"].as_str().unwrap().starts_with("Honeybees"));
    let question = body["questionText"].as_str().unwrap();
    assert_eq!(count_blanks(question), 8);
    assert_eq!(model.call_count(), 1);
    assert!(model.requests()[0].json_output);
}

#[tokio::test]
async fn generate_reports_malformed_model_output() {
    let model = Arc::new(MockModel::fixed("Sure! Here is an exercise about space."));
    let (status, body) = send(app_with(Some(model)), get("/generate-example")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to generate example: Failed to parse model output"));
}

#[tokio::test]
async fn generate_hides_transport_details() {
    let model = Arc::new(MockModel::failing());
    let (status, body) = send(app_with(Some(model)), get("/api/generate-example")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate example: Failed to reach the language model");
}

#[tokio::test]
async fn check_answers_returns_feedback() {
    let model = Arc::new(MockModel::fixed("Blank 1: correct. Blank 2: correct. Great work!"));
    let request = post_json(
        "/check-answers",
        &json!({
            "context": "The Olympics happen every four years.",
            "questionText": "The Olympics happen every ___ ___.",
            "userAnswers": ["four", "years"]
        }),
    );
    let (status, body) = send(app_with(Some(model.clone())), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feedback"], "Blank 1: correct. Blank 2: correct. Great work!");
    assert!(body.get("error").is_none());

    let prompt = &model.requests()[0].user;
    assert!(prompt
        .contains("Student's filled-in paragraph: \"The Olympics happen every four years.\""));
}

#[tokio::test]
async fn check_answers_is_also_served_under_api_prefix() {
    let model = Arc::new(MockModel::fixed("ok"));
    let request = post_json(
        "/api/check-answers",
        &json!({ "context": "c", "questionText": "q ___", "userAnswers": ["a"] }),
    );
    let (status, body) = send(app_with(Some(model)), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feedback"], "ok");
}

#[tokio::test]
async fn check_answers_missing_user_answers_is_bad_request() {
    let model = Arc::new(MockModel::fixed("unused"));
    let request = post_json("/check-answers", &json!({ "context": "c", "questionText": "q ___" }));
    let (status, body) = send(app_with(Some(model.clone())), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("userAnswers"));
    assert!(body.get("feedback").is_none());
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn validation_runs_before_credential_check() {
    let request =
        post_json("/check-answers", &json!({ "questionText": "q ___", "userAnswers": ["a"] }));
    let (status, body) = send(app_with(None), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: context");
}

#[tokio::test]
async fn check_answers_without_credential_is_server_error() {
    let request = post_json(
        "/check-answers",
        &json!({ "context": "c", "questionText": "q ___", "userAnswers": ["a"] }),
    );
    let (status, body) = send(app_with(None), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("configuration"));
}

#[tokio::test]
async fn check_answers_rejects_malformed_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/check-answers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app_with(Some(Arc::new(MockModel::fixed("x")))), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn evaluation_failure_is_generic_server_error() {
    let request = post_json(
        "/check-answers",
        &json!({ "context": "c", "questionText": "q ___", "userAnswers": ["a"] }),
    );
    let (status, body) = send(app_with(Some(Arc::new(MockModel::failing()))), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process request");
    assert!(body.get("feedback").is_none());
}

#[tokio::test]
async fn health_reports_model_configuration() {
    let (status, body) = send(app_with(None), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "model_configured": false }));
}

#[tokio::test]
async fn index_serves_the_form_page() {
    let response = app_with(None).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Reading Inference App"));
    assert!(html.contains("/check-answers"));
}
