//! The seam between the application and an external generative model.
//!
//! Both the exercise generator and the answer evaluator talk to the model only
//! through [`CompletionModel`], so the provider can be swapped without touching
//! either of them.
pub mod mock;
pub mod openai;

use std::future::Future;
use std::pin::Pin;

use crate::error::AppResult;

pub use mock::MockModel;
pub use openai::OpenAiClient;

/// A single-turn chat request: one system message and one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the provider to constrain output to a JSON object.
    pub json_output: bool,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        CompletionRequest {
            system: system.into(),
            user: user.into(),
            temperature: 0.7,
            max_tokens: 1000,
            json_output: false,
        }
    }

    pub fn json(mut self) -> Self {
        self.json_output = true;
        self
    }
}

pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = AppResult<String>> + Send + 'a>>;

/// Anything that can turn a [`CompletionRequest`] into response text.
/// Uses a boxed future so implementations can live behind `dyn`.
pub trait CompletionModel: Send + Sync {
    fn complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a>;
}
