//! Generation provider trait and decoding parameters

use async_trait::async_trait;
use serde::Serialize;

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

/// Decoding parameters for a single generation call
#[derive(Debug, Clone, Serialize)]
pub struct DecodingConfig {
    pub max_new_tokens: u32,
    pub num_beams: u32,
    pub do_sample: bool,
    pub early_stopping: bool,
    pub temperature: f32,
}

impl DecodingConfig {
    /// Deterministic beam-search decoding. Sampling stays off so repeated
    /// questions produce identical answers.
    pub fn deterministic(max_new_tokens: u32, generation: &GenerationConfig) -> Self {
        Self {
            max_new_tokens,
            num_beams: generation.num_beams,
            do_sample: false,
            early_stopping: generation.early_stopping,
            temperature: generation.temperature,
        }
    }
}

/// Trait for text2text generation backends
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Verify that the backend can serve the given model
    async fn load(&self, model: &str) -> Result<()>;

    /// Generate raw text for a prompt. May fail per request, not just at
    /// load time.
    async fn generate(&self, model: &str, prompt: &str, decoding: &DecodingConfig)
        -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Resolve a usable model: the primary first, then exactly one fallback
/// attempt. Both failing is a startup error; the service cannot run without
/// a model.
pub async fn resolve_model(
    provider: &dyn GenerationProvider,
    primary: &str,
    fallback: &str,
) -> Result<String> {
    match provider.load(primary).await {
        Ok(()) => {
            tracing::info!("Loaded model: {}", primary);
            Ok(primary.to_string())
        }
        Err(primary_err) => {
            tracing::warn!(
                "Failed to load {}: {}, trying fallback {}",
                primary,
                primary_err,
                fallback
            );
            match provider.load(fallback).await {
                Ok(()) => {
                    tracing::info!("Loaded fallback model: {}", fallback);
                    Ok(fallback.to_string())
                }
                Err(fallback_err) => Err(Error::ModelLoad(format!(
                    "primary '{}' failed ({}); fallback '{}' failed ({})",
                    primary, primary_err, fallback, fallback_err
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Provider that only knows the models it was given
    struct KnownModels(HashSet<String>);

    impl KnownModels {
        fn new(models: &[&str]) -> Self {
            Self(models.iter().map(|m| m.to_string()).collect())
        }
    }

    #[async_trait]
    impl GenerationProvider for KnownModels {
        async fn load(&self, model: &str) -> Result<()> {
            if self.0.contains(model) {
                Ok(())
            } else {
                Err(Error::Llm(format!("Model '{}' is not available", model)))
            }
        }

        async fn generate(
            &self,
            _model: &str,
            _prompt: &str,
            _decoding: &DecodingConfig,
        ) -> Result<String> {
            unreachable!("not exercised by resolution tests")
        }

        fn name(&self) -> &str {
            "known-models"
        }
    }

    #[tokio::test]
    async fn test_primary_wins_when_available() {
        let provider = KnownModels::new(&["t5-base", "t5-small"]);
        let resolved = resolve_model(&provider, "t5-base", "t5-small").await.unwrap();
        assert_eq!(resolved, "t5-base");
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_fails() {
        let provider = KnownModels::new(&["t5-small"]);
        let resolved = resolve_model(&provider, "t5-base", "t5-small").await.unwrap();
        assert_eq!(resolved, "t5-small");
    }

    #[tokio::test]
    async fn test_both_failing_is_fatal() {
        let provider = KnownModels::new(&[]);
        let err = resolve_model(&provider, "t5-base", "t5-small")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelLoad(_)));
    }

    #[test]
    fn test_deterministic_decoding() {
        let generation = GenerationConfig::default();
        let decoding = DecodingConfig::deterministic(150, &generation);

        assert_eq!(decoding.max_new_tokens, 150);
        assert_eq!(decoding.num_beams, 4);
        assert!(!decoding.do_sample);
        assert!(decoding.early_stopping);
        assert_eq!(decoding.temperature, 1.0);
    }
}
