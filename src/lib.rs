//! medask: single-endpoint medical Q&A service
//!
//! A small HTTP backend for a chat-style "ask a question" feature. Questions
//! are wrapped in a fixed instruction template, sent to a seq2seq inference
//! runner, and the raw output is run through a cleanup pipeline before being
//! returned as JSON.

pub mod config;
pub mod device;
pub mod error;
pub mod generation;
pub mod providers;
pub mod server;
pub mod types;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use types::{
    query::AskRequest,
    response::{AskResponse, StatusResponse},
};
