//! The generation and evaluation prompts.
use super::constructor::PromptConstructor;
use crate::error::AppResult;
use crate::exercise::topic::Topic;
use crate::llm::CompletionRequest;

pub const GENERATION_SYSTEM: &str = "You are an educational content creator specializing in grade-appropriate reading materials. Always respond with valid JSON.";

pub const EVALUATION_SYSTEM: &str = "You are an educational assistant that evaluates reading comprehension exercises.";

const GENERATION_TEMPLATE: &str = r#"
Create an educational reading exercise for 6th grade students (approximately 900 Lexile level) about {{ topic }}.

First, write an informative context paragraph (150-200 words) that provides clear facts and explanations about the topic. Use vocabulary and sentence structures appropriate for 6th grade students.

Then, create a completely separate question paragraph (different from the context paragraph) with 8-10 blanks. This paragraph should ask inference questions that require students to apply information they learned from the context paragraph. The blanks should test reading comprehension, inference, and critical thinking skills.

IMPORTANT FORMATTING INSTRUCTIONS:
1. Use exactly three underscores (___) for each blank
2. Do NOT number the blanks or add any additional characters
3. The blanks should appear naturally in the sentence, like this example:
   "The water cycle begins when the sun heats water, causing it to turn into ___. This vapor rises into the ___ where it forms clouds."

Format your response as a valid JSON object with the following structure:
{
  "context": "Your informative paragraph here...",
  "questionText": "Your separate paragraph with inference questions and blanks (using ___ only) here..."
}

Make sure to:
- Use only ___ for blanks (no numbers or extra characters)
- Create a question paragraph that is different from the context
- Require inference and critical thinking to fill in the blanks
- Escape any quotes or special characters to ensure valid JSON
"#;

const EVALUATION_TEMPLATE: &str = r#"
Context paragraph: "{{ context }}"

Original question paragraph with blanks: "{{ question }}"

Student's filled-in paragraph: "{{ filled }}"

Evaluate if the student's answers make sense based on the context paragraph. For each blank, determine:
1. If the answer is factually accurate based on the context
2. If the answer is grammatically correct in the sentence

Provide specific feedback for each blank and an overall assessment. Be encouraging but honest.
"#;

/// Request asking the model for a new exercise about `topic`, as JSON.
pub fn generation_request(topic: Topic) -> AppResult<CompletionRequest> {
    let described = topic.prompt_label();
    let user = PromptConstructor::new()
        .construct_prompt(GENERATION_TEMPLATE, &[("topic", described.as_str())])?;
    Ok(CompletionRequest::new(GENERATION_SYSTEM, user).json())
}

/// Request asking the model to judge a student's filled-in paragraph.
pub fn evaluation_request(
    context: &str,
    question: &str,
    filled: &str,
) -> AppResult<CompletionRequest> {
    let user = PromptConstructor::new().construct_prompt(
        EVALUATION_TEMPLATE,
        &[("context", context), ("question", question), ("filled", filled)],
    )?;
    Ok(CompletionRequest::new(EVALUATION_SYSTEM, user))
}
