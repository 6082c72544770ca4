//! Application state for the Q&A server

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::device::Device;
use crate::error::Result;
use crate::generation::AnswerSanitizer;
use crate::providers::{resolve_model, GenerationProvider, RunnerClient};

/// Shared application state
///
/// Built once at startup and never mutated afterwards; every request sees
/// the same resolved model and compute device.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ServiceConfig,
    /// Generation backend
    provider: Arc<dyn GenerationProvider>,
    /// Output cleanup pipeline (compiled once)
    sanitizer: AnswerSanitizer,
    /// Resolved model identifier (primary or fallback)
    model: String,
    /// Detected compute device
    device: Device,
}

impl AppState {
    /// Connect to the runner and resolve a usable model, primary first and
    /// then the configured fallback. Both failing aborts startup.
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        let provider: Arc<dyn GenerationProvider> = Arc::new(RunnerClient::new(&config.runner)?);

        let model = resolve_model(
            provider.as_ref(),
            &config.runner.primary_model,
            &config.runner.fallback_model,
        )
        .await?;

        let device = Device::detect();
        tracing::info!("Serving model {} on {}", model, device.as_str());

        Ok(Self::from_parts(config, provider, model, device))
    }

    /// Assemble state from already-resolved parts
    pub fn from_parts(
        config: ServiceConfig,
        provider: Arc<dyn GenerationProvider>,
        model: String,
        device: Device,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                provider,
                sanitizer: AnswerSanitizer::new(),
                model,
                device,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Get the generation provider
    pub fn provider(&self) -> &Arc<dyn GenerationProvider> {
        &self.inner.provider
    }

    /// Get the output sanitizer
    pub fn sanitizer(&self) -> &AnswerSanitizer {
        &self.inner.sanitizer
    }

    /// Get the resolved model identifier
    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Get the detected device
    pub fn device(&self) -> Device {
        self.inner.device
    }
}
