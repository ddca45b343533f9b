//! Thin HTTP client for OpenAI-compatible chat-completion endpoints.
//!
//! - `chat_completion` posts to `{base_url}/chat/completions` and returns the
//!   first choice's message content.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{CompletionFuture, CompletionModel, CompletionRequest};
use crate::config::Config;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        OpenAiClient { client: Client::new(), base_url: base, api_key, model }
    }

    /// Build a client from configuration, failing when no API key is set.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .ok_or_else(|| AppError::Configuration("API key missing".to_string()))?;
        Ok(Self::new(config.openai_base_url.clone(), api_key, config.openai_model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// JSON body for `/chat/completions`. `response_format` is only set when
    /// the request asks for JSON output.
    pub fn request_body(&self, request: &CompletionRequest) -> Value {
        let messages = [
            ChatMessage { role: "system", content: &request.system },
            ChatMessage { role: "user", content: &request.user },
        ];
        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });
        if request.json_output {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }

    /// Send a chat completion and return the first choice's text.
    pub async fn chat_completion(&self, request: &CompletionRequest) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::info!(
            model = %self.model,
            json_output = request.json_output,
            "Sending chat completion to {}",
            url
        );

        let body = self.request_body(request);
        tracing::debug!("Completion payload: {}", body);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let parsed: ChatCompletionResponse =
                response.json().await.map_err(AppError::HttpClient)?;
            extract_content(parsed)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message =
                format!("Chat completion failed. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Provider(error_message))
        }
    }
}

fn extract_content(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(AppError::EmptyResponse)
}

impl CompletionModel for OpenAiClient {
    fn complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a> {
        Box::pin(self.chat_completion(request))
    }
}
