use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::exercise::{AnswerEvaluator, ExerciseGenerator};
use crate::llm::{CompletionModel, OpenAiClient};

/// State shared by all handlers. `model` is `None` when no API key is
/// configured; model-backed routes then answer with a configuration error.
pub struct AppState {
    model: Option<Arc<dyn CompletionModel>>,
}

impl AppState {
    pub fn new(model: Option<Arc<dyn CompletionModel>>) -> Self {
        AppState { model }
    }

    pub fn from_config(config: &Config) -> Self {
        match OpenAiClient::from_config(config) {
            Ok(client) => {
                let model: Arc<dyn CompletionModel> = Arc::new(client);
                Self::new(Some(model))
            }
            Err(err) => {
                tracing::warn!("{}; model-backed routes will fail", err);
                Self::new(None)
            }
        }
    }

    pub fn model_configured(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> AppResult<Arc<dyn CompletionModel>> {
        self.model
            .clone()
            .ok_or_else(|| AppError::Configuration("API key missing".to_string()))
    }

    pub fn generator(&self) -> AppResult<ExerciseGenerator> {
        self.model().map(ExerciseGenerator::new)
    }

    pub fn evaluator(&self) -> AppResult<AnswerEvaluator> {
        self.model().map(AnswerEvaluator::new)
    }
}

fn exercise_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-example", get(handlers::generate_example))
        .route("/check-answers", post(handlers::check_answers))
}

/// The full application router. Exercise routes are served both at the root
/// and under `/api`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/reading-app", get(handlers::index))
        .route("/health", get(handlers::health))
        .merge(exercise_routes())
        .nest("/api", exercise_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
