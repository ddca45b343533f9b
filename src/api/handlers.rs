//! Axum request handlers for the HTTP API.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};
use crate::exercise::evaluator::validate_submission;
use crate::exercise::Exercise;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswersRequest {
    pub context: Option<String>,
    pub question_text: Option<String>,
    pub user_answers: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "model_configured": state.model_configured() }))
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate_example(State(state): State<Arc<AppState>>) -> AppResult<Json<Exercise>> {
    let generator = state.generator()?;
    generator
        .generate()
        .await
        .map(Json)
        .map_err(|e| AppError::Generation(Box::new(e)))
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn check_answers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckAnswersRequest>, JsonRejection>,
) -> AppResult<Json<FeedbackResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidBody(e.to_string()))?;
    validate_submission(
        payload.context.as_deref(),
        payload.question_text.as_deref(),
        payload.user_answers.as_deref(),
    )?;
    let context = payload.context.unwrap_or_default();
    let question_text = payload.question_text.unwrap_or_default();
    let user_answers = payload.user_answers.unwrap_or_default();
    tracing::info!(answers = user_answers.len(), "Checking answers");

    let evaluator = state.evaluator()?;
    let feedback = evaluator.evaluate(&context, &question_text, &user_answers).await?;
    Ok(Json(FeedbackResponse { feedback }))
}
