//! Asks the model to grade a student's filled-in paragraph.
use std::sync::Arc;

use crate::blanks::fill;
use crate::error::{AppError, AppResult};
use crate::llm::CompletionModel;
use crate::prompt::evaluation_request;

#[derive(Clone)]
pub struct AnswerEvaluator {
    model: Arc<dyn CompletionModel>,
}

impl AnswerEvaluator {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        AnswerEvaluator { model }
    }

    /// Fill the template with `answers` and return the model's feedback verbatim.
    pub async fn evaluate(
        &self,
        context: &str,
        question_template: &str,
        answers: &[String],
    ) -> AppResult<String> {
        validate_submission(Some(context), Some(question_template), Some(answers))?;

        let filled = fill(question_template, answers);
        tracing::debug!(answers = answers.len(), "Evaluating filled question: {}", filled);
        let request = evaluation_request(context, question_template, &filled)?;

        let feedback = self
            .model
            .complete(&request)
            .await
            .map_err(|e| AppError::Evaluation(e.to_string()))?;
        if feedback.trim().is_empty() {
            return Err(AppError::Evaluation("empty response from model".to_string()));
        }
        Ok(feedback)
    }
}

/// Check that every field a submission needs is present and non-empty.
/// The error lists all missing fields by their wire names.
pub fn validate_submission(
    context: Option<&str>,
    question_text: Option<&str>,
    answers: Option<&[String]>,
) -> AppResult<()> {
    let mut missing = Vec::new();
    if context.map_or(true, |c| c.trim().is_empty()) {
        missing.push("context");
    }
    if question_text.map_or(true, |q| q.trim().is_empty()) {
        missing.push("questionText");
    }
    if answers.map_or(true, |a| a.is_empty()) {
        missing.push("userAnswers");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(missing.join(", ")))
    }
}
