//! Configuration management for Summarist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{MAX_LENGTH_LIMIT, REQUEST_TIMEOUT_MAX_SECONDS, REQUEST_TIMEOUT_MIN_SECONDS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Model backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the Ollama HTTP API.
    /// The `OLLAMA_HOST` environment variable takes precedence when set.
    pub host: String,
    /// Per-request timeout in seconds for model calls
    pub request_timeout_seconds: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default value for the max summary length entry, in characters
    pub default_max_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:11434".to_string(),
            request_timeout_seconds: 120,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_max_length: 500,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("summarist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("summarist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.backend.host.is_empty() {
            anyhow::bail!("backend.host cannot be empty");
        }
        if !self.backend.host.starts_with("http://") && !self.backend.host.starts_with("https://") {
            anyhow::bail!(
                "backend.host must be an http(s) URL, got '{}'",
                self.backend.host
            );
        }

        if self.backend.request_timeout_seconds < REQUEST_TIMEOUT_MIN_SECONDS
            || self.backend.request_timeout_seconds > REQUEST_TIMEOUT_MAX_SECONDS
        {
            anyhow::bail!(
                "backend.request_timeout_seconds must be between {} and {}, got {}",
                REQUEST_TIMEOUT_MIN_SECONDS,
                REQUEST_TIMEOUT_MAX_SECONDS,
                self.backend.request_timeout_seconds
            );
        }

        if self.ui.default_max_length == 0 || self.ui.default_max_length > MAX_LENGTH_LIMIT {
            anyhow::bail!(
                "ui.default_max_length must be between 1 and {}, got {}",
                MAX_LENGTH_LIMIT,
                self.ui.default_max_length
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Summarist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", crate::constants::CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("summarist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
