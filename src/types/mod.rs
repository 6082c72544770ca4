//! Request and response payloads

pub mod query;
pub mod response;

pub use query::AskRequest;
pub use response::{AskResponse, StatusResponse};
