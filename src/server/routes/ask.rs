//! Question answering endpoint

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::providers::DecodingConfig;
use crate::server::state::AppState;
use crate::types::{query::AskRequest, response::AskResponse};

/// POST /ask - answer a free-text question
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();

    let question = request.question.as_deref().unwrap_or("").trim().to_string();
    if question.is_empty() {
        return Err(Error::MissingQuestion);
    }

    tracing::info!("Question: \"{}\"", question);

    let generation = &state.config().generation;
    let max_new_tokens = request
        .max_new_tokens
        .unwrap_or(generation.default_max_new_tokens)
        .min(generation.max_new_tokens_cap);

    let prompt = PromptBuilder::build(&question);
    let decoding = DecodingConfig::deterministic(max_new_tokens, generation);

    let raw = state
        .provider()
        .generate(state.model(), &prompt, &decoding)
        .await?;

    let answer = state.sanitizer().sanitize(&raw, &prompt);

    tracing::info!("Answered in {}ms", start.elapsed().as_millis());

    Ok(Json(AskResponse::single(answer, state.model())))
}
