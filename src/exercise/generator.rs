//! Asks the model for a fresh exercise on a random topic.
use std::ops::RangeInclusive;
use std::sync::Arc;

use super::topic::Topic;
use super::Exercise;
use crate::blanks::count_blanks;
use crate::error::{AppError, AppResult};
use crate::llm::CompletionModel;
use crate::prompt::generation_request;

/// Blank count the prompt asks for. Models do not always comply, so this is
/// only checked softly.
pub const EXPECTED_BLANKS: RangeInclusive<usize> = 8..=10;

#[derive(Clone)]
pub struct ExerciseGenerator {
    model: Arc<dyn CompletionModel>,
}

impl ExerciseGenerator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        ExerciseGenerator { model }
    }

    pub async fn generate(&self) -> AppResult<Exercise> {
        let topic = Topic::random();
        self.generate_for(topic).await
    }

    pub async fn generate_for(&self, topic: Topic) -> AppResult<Exercise> {
        tracing::info!(%topic, "Generating new reading example");
        let request = generation_request(topic)?;
        let raw = self.model.complete(&request).await?;
        let exercise = parse_exercise(&raw)?;

        let blanks = count_blanks(&exercise.question_text);
        if !EXPECTED_BLANKS.contains(&blanks) {
            tracing::warn!(blanks, "Generated question has an unexpected number of blanks");
        }
        Ok(exercise)
    }
}

/// Parse the model's JSON answer into an [`Exercise`].
///
/// Tolerates surrounding whitespace and a Markdown code fence.
pub fn parse_exercise(raw: &str) -> AppResult<Exercise> {
    let body = strip_code_fence(raw.trim());
    let exercise: Exercise =
        serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))?;
    if exercise.context.trim().is_empty() {
        return Err(AppError::Parse("field `context` is empty".to_string()));
    }
    if exercise.question_text.trim().is_empty() {
        return Err(AppError::Parse("field `questionText` is empty".to_string()));
    }
    Ok(exercise)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = match inner.find('\n') {
        Some(newline) => &inner[newline + 1..],
        None => inner,
    };
    inner.trim_end().strip_suffix("```").unwrap_or(inner).trim()
}
