//! Summarist - a terminal text summarizer for local LLMs
//!
//! This library provides a terminal-based interface for summarizing text
//! with a locally running Ollama instance. It includes a backend client for
//! model listing and chat completion, a background-task orchestration layer
//! that keeps slow network calls off the UI loop, and an interactive UI
//! built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Model service abstraction and the Ollama client
//! * [`config`] - Application configuration management
//! * [`summarizer`] - Summarization service facade
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Backend abstraction layer for model services
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Summarization service built on top of a model backend
pub mod summarizer;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for text handling and other helpers
pub mod utils;
