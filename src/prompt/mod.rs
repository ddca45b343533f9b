//! Prompt construction for the two model calls.
pub mod constructor;
pub mod templates;

pub use constructor::PromptConstructor;
pub use templates::{evaluation_request, generation_request};
