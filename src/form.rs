//! Interactive form state for a single practice session.
//!
//! All form fields live in one [`FormState`] value; every user action or
//! completed model call is a method that moves it between [`Phase`]s. Nothing
//! here renders anything, so the state machine is testable on its own.
use crate::blanks::count_blanks;
use crate::error::{AppError, AppResult};
use crate::exercise::{AnswerEvaluator, Exercise, ExerciseGenerator};

pub const FALLBACK_NOTICE: &str = "Could not generate a new example. Using a default example instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Editing,
    BlanksDetected,
    Submitting,
    ShowingResults,
}

/// What gets sent to the evaluator when the student submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub context: String,
    pub question_text: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    context: String,
    question_text: String,
    answers: Vec<String>,
    feedback: Option<String>,
    notice: Option<String>,
    generating: bool,
    phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        FormState {
            context: String::new(),
            question_text: String::new(),
            answers: Vec::new(),
            feedback: None,
            notice: None,
            generating: false,
            phase: Phase::Empty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// One-off message for the user, e.g. that the fallback exercise was loaded.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
        self.after_edit();
    }

    /// Replace the template; the answer set is rebuilt empty to match its blanks.
    pub fn set_question_text(&mut self, question_text: impl Into<String>) {
        self.question_text = question_text.into();
        self.answers = vec![String::new(); count_blanks(&self.question_text)];
        self.after_edit();
    }

    pub fn set_answer(&mut self, index: usize, value: impl Into<String>) -> AppResult<()> {
        let count = self.answers.len();
        let slot = self.answers.get_mut(index).ok_or(AppError::BlankIndex { index, count })?;
        *slot = value.into();
        if self.phase == Phase::ShowingResults {
            self.phase = Phase::BlanksDetected;
        }
        Ok(())
    }

    pub fn load_exercise(&mut self, exercise: Exercise) {
        self.set_context(exercise.context);
        self.set_question_text(exercise.question_text);
    }

    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Submitting
            && !self.answers.is_empty()
            && self.answers.iter().all(|a| !a.is_empty())
    }

    pub fn begin_submit(&mut self) -> AppResult<Submission> {
        if self.phase == Phase::Submitting {
            return Err(AppError::NotReady("a submission is already in flight".to_string()));
        }
        if self.answers.is_empty() {
            return Err(AppError::NotReady("the question has no blanks".to_string()));
        }
        if let Some(index) = self.answers.iter().position(|a| a.is_empty()) {
            return Err(AppError::NotReady(format!("blank {} has no answer", index + 1)));
        }
        self.phase = Phase::Submitting;
        self.feedback = None;
        Ok(Submission {
            context: self.context.clone(),
            question_text: self.question_text.clone(),
            answers: self.answers.clone(),
        })
    }

    /// Both outcomes end up as feedback text; failures are prefixed with `Error:`.
    pub fn finish_submit(&mut self, result: AppResult<String>) {
        let text = match result {
            Ok(feedback) => feedback,
            Err(err) => format!("Error: {}", err),
        };
        self.feedback = Some(text);
        self.phase = Phase::ShowingResults;
    }

    pub fn begin_generate(&mut self) -> AppResult<()> {
        if self.generating {
            return Err(AppError::NotReady("an example is already being generated".to_string()));
        }
        self.generating = true;
        Ok(())
    }

    /// Load the generated exercise, or the fallback plus a notice on failure.
    pub fn finish_generate(&mut self, result: AppResult<Exercise>) {
        self.generating = false;
        match result {
            Ok(exercise) => self.load_exercise(exercise),
            Err(err) => {
                tracing::warn!(error = %err, "Example generation failed, using fallback");
                self.load_exercise(Exercise::fallback());
                self.notice = Some(FALLBACK_NOTICE.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        *self = FormState::new();
    }

    /// Submit the current answers and wait for feedback.
    pub async fn run_submit(&mut self, evaluator: &AnswerEvaluator) -> AppResult<&str> {
        let submission = self.begin_submit()?;
        let result = evaluator
            .evaluate(&submission.context, &submission.question_text, &submission.answers)
            .await;
        self.finish_submit(result);
        Ok(self.feedback.as_deref().unwrap_or_default())
    }

    /// Load a freshly generated exercise, falling back on failure.
    pub async fn run_generate(&mut self, generator: &ExerciseGenerator) -> AppResult<()> {
        self.begin_generate()?;
        let result = generator.generate().await;
        self.finish_generate(result);
        Ok(())
    }

    fn after_edit(&mut self) {
        self.feedback = None;
        self.phase = if self.context.is_empty() && self.question_text.is_empty() {
            Phase::Empty
        } else if self.answers.is_empty() {
            Phase::Editing
        } else {
            Phase::BlanksDetected
        };
    }
}
