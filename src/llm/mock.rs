use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{CompletionFuture, CompletionModel, CompletionRequest};
use crate::error::AppError;

/// Scripted model for tests. Cycles through canned responses and records
/// every request it receives.
pub struct MockModel {
    responses: Vec<String>,
    call_count: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockModel {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn fixed(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// A model whose every call fails like an unreachable provider.
    pub fn failing() -> Self {
        Self::new(vec![])
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl CompletionModel for MockModel {
    fn complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a> {
        let idx = self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }

        if self.responses.is_empty() {
            return Box::pin(async {
                Err(AppError::Provider("mock model: no responses".into()))
            });
        }

        let response = self.responses[idx % self.responses.len()].clone();
        Box::pin(async move { Ok(response) })
    }
}
