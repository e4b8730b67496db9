//! Ollama backend implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{BackendError, SummaryBackend};
use crate::config::BackendConfig;

/// Response body of `GET /api/tags`.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

/// One installed model as reported by `GET /api/tags`.
#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    pub name: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Parse a `GET /api/tags` response body into model names.
pub fn parse_tags(body: &str) -> Result<Vec<String>, BackendError> {
    let tags: TagsResponse =
        serde_json::from_str(body).map_err(|e| BackendError::InvalidData(e.to_string()))?;
    Ok(tags.models.into_iter().map(|m| m.name).collect())
}

/// Parse a non-streaming `POST /api/chat` response body into the reply text.
pub fn parse_chat_response(body: &str) -> Result<String, BackendError> {
    let chat: ChatResponse =
        serde_json::from_str(body).map_err(|e| BackendError::InvalidData(e.to_string()))?;
    Ok(chat.message.content)
}

/// Normalize a host URL: strip trailing slashes so endpoint joins stay clean.
pub fn normalize_host(host: &str) -> String {
    host.trim_end_matches('/').to_string()
}

/// Ollama backend implementation over the local HTTP API.
pub struct OllamaBackend {
    host: String,
    client: reqwest::Client,
}

impl OllamaBackend {
    /// Create a new Ollama backend for the given host URL.
    pub fn new(host: impl Into<String>, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_default();

        Self {
            host: normalize_host(&host.into()),
            client,
        }
    }

    /// Create a backend from configuration.
    ///
    /// The `OLLAMA_HOST` environment variable overrides the configured host.
    pub fn from_config(config: &BackendConfig) -> Self {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| config.host.clone());
        Self::new(host, Duration::from_secs(config.request_timeout_seconds))
    }

    /// The normalized host URL this backend talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    // Helper: map an error-status response to a Model error, preferring the
    // structured error body Ollama returns.
    async fn error_from_response(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api_error) => BackendError::Model(api_error.error),
            Err(_) => BackendError::Model(format!("HTTP {status}")),
        }
    }
}

#[async_trait]
impl SummaryBackend for OllamaBackend {
    fn backend_type(&self) -> &str {
        "ollama"
    }

    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/api/tags", self.host);
        log::info!("Listing models from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        parse_tags(&body)
    }

    async fn chat(&self, model: &str, prompt: &str) -> Result<String, BackendError> {
        let url = format!("{}/api/chat", self.host);
        log::info!("Chat completion with model '{model}' via {url}");

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;
        parse_chat_response(&body)
    }
}
