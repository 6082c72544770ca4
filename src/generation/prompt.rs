//! Prompt template for the question-answering model

/// Prompt builder for question answering
pub struct PromptBuilder;

impl PromptBuilder {
    /// Wrap a user question in the fixed instruction template.
    ///
    /// Pure function; emptiness is validated by the request handler before
    /// this runs, so any input string is acceptable here.
    pub fn build(question: &str) -> String {
        format!(
            "Answer this medical question in 2-3 clear sentences. \
             Include practical advice if relevant.\n\n\
             Question: {}\n\n\
             Answer:",
            question
        )
    }
}
