//! Prompt construction and output cleanup

pub mod prompt;
pub mod sanitize;

pub use prompt::PromptBuilder;
pub use sanitize::{AnswerSanitizer, FALLBACK_ANSWER};
