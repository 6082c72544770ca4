//! Response payloads

use serde::Serialize;

/// Body of a successful `POST /ask`
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Always a single-element sequence
    pub answers: Vec<String>,
    /// Identifier of the model actually in use
    pub model: String,
    pub success: bool,
}

impl AskResponse {
    /// Build the single-answer success payload
    pub fn single(answer: String, model: impl Into<String>) -> Self {
        Self {
            answers: vec![answer],
            model: model.into(),
            success: true,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    /// Resolved model identifier (primary or fallback)
    pub model: String,
    pub device: &'static str,
}
