//! Reading inference exercise service library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the server binary.
//! - `blanks`: Blank (`___`) detection and positional answer substitution.
//! - `exercise`: Exercise type, topic list, generator and evaluator.
//! - `form`: Practice-form state machine used by the interactive CLI.
//! - `llm`: The completion-model seam, an OpenAI client and a test mock.
//! - `prompt`: Prompt construction with `{{placeholder}}` replacement.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `Exercise`,
//! `ExerciseGenerator`, `AnswerEvaluator`, `FormState` and `OpenAiClient`.
pub mod api;
pub mod blanks;
pub mod config;
pub mod error;
pub mod exercise;
pub mod form;
pub mod llm;
pub mod prompt;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use exercise::{AnswerEvaluator, Exercise, ExerciseGenerator};
pub use form::FormState;
pub use llm::OpenAiClient;
