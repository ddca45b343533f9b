//! Reading exercises and the two model-backed operations on them.
pub mod evaluator;
pub mod generator;
pub mod topic;

use serde::{Deserialize, Serialize};

pub use evaluator::AnswerEvaluator;
pub use generator::ExerciseGenerator;
pub use topic::Topic;

/// A context paragraph plus a separate question paragraph containing blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub context: String,
    pub question_text: String,
}

const FALLBACK_CONTEXT: &str = "The modern Olympic Games are a major international multi-sport event held once every four years. The Games were first held in 1896 in Athens, Greece, and were most recently held in 2021 in Tokyo, Japan (delayed from 2020 due to the COVID-19 pandemic). The International Olympic Committee (IOC) organizes the Games and oversees the host city's preparations. The Winter Olympic Games were created for snow and ice sports and are held separately from the Summer Olympic Games, starting in 1924. Originally, both the Summer and Winter Games were held in the same year, but since 1994, they have been celebrated two years apart.";

const FALLBACK_QUESTION: &str = "The Olympic Games are a ___ sporting event that occurs every ___ years. They were first held in ___ in Athens, Greece. The most recent Olympics were held in ___, Japan in ___ instead of 2020 because of the ___. The ___ is responsible for organizing the Games. The Winter Olympics, which focus on ___ sports, began in ___ and are now held ___ years apart from the Summer Games.";

impl Exercise {
    pub fn new(context: impl Into<String>, question_text: impl Into<String>) -> Self {
        Exercise { context: context.into(), question_text: question_text.into() }
    }

    /// Built-in exercise used when generation fails.
    pub fn fallback() -> Self {
        Exercise::new(FALLBACK_CONTEXT, FALLBACK_QUESTION)
    }

    pub fn blank_count(&self) -> usize {
        crate::blanks::count_blanks(&self.question_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_ten_blanks() {
        assert_eq!(Exercise::fallback().blank_count(), 10);
    }

    #[test]
    fn serializes_with_camel_case_question_field() {
        let value = serde_json::to_value(Exercise::new("c", "q ___")).unwrap();
        assert_eq!(value["context"], "c");
        assert_eq!(value["questionText"], "q ___");
        assert!(value.get("question_text").is_none());
    }
}
