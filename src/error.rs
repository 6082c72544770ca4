//! Error types for the Q&A service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable model could be resolved at startup
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    /// Request is missing a usable question
    #[error("Missing question")]
    MissingQuestion,

    /// Runner/LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // The API promises exactly two error shapes: a bare message for the
        // missing-question client error, and a message plus success flag for
        // everything that fails server-side.
        match self {
            Error::MissingQuestion => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing question" })),
            )
                .into_response(),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string(), "success": false })),
            )
                .into_response(),
        }
    }
}
