//! Summarization service facade.
//!
//! Wraps a [`SummaryBackend`] with the application-level operations the UI
//! needs: model listing, connection probing, and text summarization.

use std::sync::Arc;

use anyhow::Result;

use crate::backend::SummaryBackend;
use crate::logger::Logger;
use crate::utils::text;

/// Service that mediates between the UI and the model backend.
///
/// Cheap to clone; clones share the backend and the session logger. Worker
/// tasks receive a clone and never touch UI state.
#[derive(Clone)]
pub struct SummarizerService {
    backend: Arc<dyn SummaryBackend>,
    logger: Logger,
}

impl SummarizerService {
    /// Create a new service over the given backend.
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self {
            backend,
            logger: Logger::new(),
        }
    }

    /// Replace the session logger (shared with the UI's logs dialog).
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    /// The session logger used by this service.
    pub fn logger(&self) -> Logger {
        self.logger.clone()
    }

    /// List the models installed on the backend.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let models = self.backend.list_models().await?;
        self.logger
            .log(format!("Service: Listed {} models", models.len()));
        Ok(models)
    }

    /// Probe the backend by listing models; any failure means not connected.
    pub async fn check_connection(&self) -> bool {
        match self.backend.list_models().await {
            Ok(_) => {
                self.logger.log("Service: Connection check succeeded".to_string());
                true
            }
            Err(e) => {
                self.logger
                    .log(format!("Service: Connection check failed: {e}"));
                log::warn!("Connection check failed: {e}");
                false
            }
        }
    }

    /// Summarize `input` with the given model, targeting roughly
    /// `max_length` characters.
    pub async fn summarize(&self, model: &str, input: &str, max_length: usize) -> Result<String> {
        self.logger.log(format!(
            "Service: Summarizing {} words with model '{}' (max length {})",
            text::word_count(input),
            model,
            max_length
        ));

        let prompt = Self::build_prompt(input, max_length);
        let summary = self.backend.chat(model, &prompt).await?;

        self.logger
            .log(format!("Service: Received summary ({} chars)", summary.len()));
        Ok(summary)
    }

    /// Build the summarization prompt sent to the model.
    pub fn build_prompt(input: &str, max_length: usize) -> String {
        format!(
            "Please summarize the following text in approximately {max_length} characters:\n\n{input}"
        )
    }
}
