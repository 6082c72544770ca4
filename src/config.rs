//! Configuration for the Q&A service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Inference runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Decoding defaults
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl ServiceConfig {
    /// Load configuration: `MEDASK_CONFIG` first, then the user config dir,
    /// then built-in defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os("MEDASK_CONFIG") {
            return Self::from_file(Path::new(&path));
        }

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("medask").join("config.toml");
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Inference runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Runner base URL
    pub base_url: String,
    /// Primary model identifier
    pub primary_model: String,
    /// Fallback model identifier, tried once when the primary fails to load
    pub fallback_model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            primary_model: "google/flan-t5-base".to_string(),
            fallback_model: "google/flan-t5-small".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Decoding defaults for generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Token budget when the request does not specify one
    pub default_max_new_tokens: u32,
    /// Upper bound on the per-request token budget
    pub max_new_tokens_cap: u32,
    /// Beam search width
    pub num_beams: u32,
    /// Stop beams early once they finish
    pub early_stopping: bool,
    /// Temperature for generation (neutral by default, sampling is off)
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_max_new_tokens: 100,
            max_new_tokens_cap: 200,
            num_beams: 4,
            early_stopping: true,
            temperature: 1.0,
        }
    }
}
