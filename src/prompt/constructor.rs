//! Prompt templating with simple `{{placeholder}}` substitution.
//!
//! Given a text template and a set of named inputs, replaces every
//! `{{ key }}` occurrence with the matching input. The template is scanned in
//! a single pass, so substituted values are never themselves expanded; this
//! matters because inputs are student-typed text.
use crate::error::{AppError, AppResult};

pub struct PromptConstructor;

impl PromptConstructor {
    pub fn new() -> Self {
        PromptConstructor
    }

    /// Construct a prompt by substituting placeholders inside `template`
    /// with corresponding values from `inputs`.
    pub fn construct_prompt(&self, template: &str, inputs: &[(&str, &str)]) -> AppResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find("{{") {
            let Some(close) = rest[open + 2..].find("}}") else {
                return Err(AppError::Parse(format!(
                    "Unterminated placeholder in template: {}",
                    &rest[open..]
                )));
            };
            out.push_str(&rest[..open]);
            let key = rest[open + 2..open + 2 + close].trim();
            let value = inputs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .ok_or_else(|| AppError::Parse(format!("Missing input for placeholder: {}", key)))?;
            out.push_str(value);
            rest = &rest[open + 2 + close + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

impl Default for PromptConstructor {
    fn default() -> Self {
        Self::new()
    }
}
