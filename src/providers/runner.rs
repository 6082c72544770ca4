//! HTTP client for the seq2seq inference runner
//!
//! The runner exposes an Ollama-compatible surface: `GET /api/tags` lists
//! the models it serves, `POST /api/generate` runs one generation with an
//! options object. Generation failures surface directly; there is no retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::RunnerConfig;
use crate::error::{Error, Result};

use super::generator::{DecodingConfig, GenerationProvider};

/// Inference runner API client
pub struct RunnerClient {
    client: Client,
    config: RunnerConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a DecodingConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

impl RunnerClient {
    /// Create a new runner client
    pub fn new(config: &RunnerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl GenerationProvider for RunnerClient {
    async fn load(&self, model: &str) -> Result<()> {
        let url = format!("{}/api/tags", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Runner unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Llm(format!(
                "Model listing failed: HTTP {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse model listing: {}", e)))?;

        if tags.models.iter().any(|m| m.name == model) {
            Ok(())
        } else {
            Err(Error::Llm(format!(
                "Model '{}' is not available on the runner",
                model
            )))
        }
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        decoding: &DecodingConfig,
    ) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: decoding,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Generation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Generation failed: HTTP {} - {}",
                status, body
            )));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse generation response: {}", e)))?;

        Ok(generate_response.response)
    }

    fn name(&self) -> &str {
        "runner"
    }
}
