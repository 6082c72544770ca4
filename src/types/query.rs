//! Request payloads

use serde::Deserialize;

/// Body of `POST /ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Free-text question; rejected when missing or blank after trimming
    #[serde(default)]
    pub question: Option<String>,
    /// Optional generation budget, clamped server-side
    #[serde(default)]
    pub max_new_tokens: Option<u32>,
}
