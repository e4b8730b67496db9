//! Backend abstraction layer for model services.
//!
//! This module defines the common interface a model backend must implement,
//! along with the error taxonomy shared by all backends.

use async_trait::async_trait;

pub mod ollama;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Cannot reach the model service: {0}")]
    Unavailable(String),

    #[error("Model request failed: {0}")]
    Model(String),

    #[error("Invalid response from the model service: {0}")]
    InvalidData(String),
}

/// Backend trait that all model services must implement.
///
/// This trait defines the common interface for interacting with chat-capable
/// model backends (Ollama today; llama.cpp servers or similar later).
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "ollama").
    fn backend_type(&self) -> &str;

    /// List the names of the models installed on the backend.
    async fn list_models(&self) -> Result<Vec<String>, BackendError>;

    /// Run a single-turn chat completion and return the assistant reply.
    async fn chat(&self, model: &str, prompt: &str) -> Result<String, BackendError>;
}
