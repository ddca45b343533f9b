//! Common error type and alias.
//!
//! Every HTTP-facing failure is rendered as a `{"error": "..."}` body; the
//! status code depends on the variant.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Server configuration error: {0}")]
    Configuration(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("model provider error: {0}")]
    Provider(String),

    #[error("No content received from the language model")]
    EmptyResponse,

    #[error("Failed to parse model output: {0}")]
    Parse(String),

    #[error("Failed to evaluate answers: {0}")]
    Evaluation(String),

    #[error("Failed to generate example: {0}")]
    Generation(Box<AppError>),

    #[error("blank {index} does not exist ({count} blanks)")]
    BlankIndex { index: usize, count: usize },

    #[error("form is not ready: {0}")]
    NotReady(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure happened while talking to the model provider.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::HttpClient(_) | AppError::Provider(_) | AppError::EmptyResponse
        )
    }

    /// Message safe to hand back to an HTTP client. Transport failures are
    /// collapsed to a generic message; the full error is only logged.
    pub fn public_message(&self) -> String {
        match self {
            AppError::HttpClient(_) | AppError::Provider(_) => {
                "Failed to reach the language model".to_string()
            }
            AppError::Evaluation(_) => "Failed to process request".to_string(),
            AppError::Generation(inner) => {
                format!("Failed to generate example: {}", inner.public_message())
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation("userAnswers".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Missing required fields: userAnswers");
    }

    #[test]
    fn configuration_message_mentions_configuration() {
        let err = AppError::Configuration("API key missing".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.public_message().contains("configuration"));
    }

    #[test]
    fn transport_details_are_hidden() {
        let err = AppError::Provider("Status: 401, Body: invalid key sk-abc".into());
        assert!(err.is_transport());
        assert!(!err.public_message().contains("sk-abc"));
    }

    #[test]
    fn generation_wraps_inner_public_message() {
        let err = AppError::Generation(Box::new(AppError::Provider("secret detail".into())));
        assert_eq!(
            err.public_message(),
            "Failed to generate example: Failed to reach the language model"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_errors_keep_underlying_message() {
        let err = AppError::Parse("missing field `context`".into());
        assert!(err.public_message().contains("missing field `context`"));
    }
}
