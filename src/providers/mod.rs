//! Generation backends

pub mod generator;
pub mod runner;

pub use generator::{resolve_model, DecodingConfig, GenerationProvider};
pub use runner::RunnerClient;
