//! Constants used throughout the application
//!
//! This module centralizes status messages, UI text, and other constant
//! values to improve maintainability and consistency.

// Status Bar Messages
pub const STATUS_READY: &str = "● Ready";
pub const STATUS_PROCESSING: &str = "Processing...";
pub const STATUS_LOADING_MODELS: &str = "Loading models...";
pub const STATUS_CHECKING_CONNECTION: &str = "Checking connection...";
pub const STATUS_CONNECTED: &str = "● Connected to Ollama";
pub const STATUS_CONNECTION_FAILED: &str = "● Connection failed";
pub const STATUS_NOT_REACHABLE: &str = "● Ollama not reachable";
pub const STATUS_ERROR: &str = "● Error occurred";
pub const STATUS_NO_MODELS: &str = "● No models installed";
pub const STATUS_COPIED: &str = "Summary copied to clipboard";

// Model Selector Placeholders
pub const MODELS_LOADING_PLACEHOLDER: &str = "Loading...";
pub const MODELS_ERROR_PLACEHOLDER: &str = "Error loading models";
pub const MODELS_EMPTY_PLACEHOLDER: &str = "No models found";

// Validation Warning Messages
pub const WARN_EMPTY_INPUT: &str = "Please enter text to summarize";
pub const WARN_BAD_MAX_LENGTH: &str = "Max length must be a positive number";
pub const WARN_NO_MODEL: &str = "No model selected";
pub const WARN_NO_SUMMARY_COPY: &str = "No summary to copy";
pub const WARN_NO_SUMMARY_SAVE: &str = "No summary to save";

// Input Panel
pub const INPUT_PLACEHOLDER: &str = "Paste your long text here...";

// Status bar key hints shown when idle
pub const KEY_HINTS: &str = "^S summarize • ^R models • ^T connection • F1 help";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Session Logs - Press 'Esc' or 'q' to close";

// UI Layout Constants
/// Height of the settings bar in rows
pub const SETTINGS_BAR_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
/// Maximum number of digits accepted by the max-length entry
pub const MAX_LENGTH_ENTRY_MAX_DIGITS: usize = 6;

// Config bounds
/// Minimum allowed request timeout in seconds
pub const REQUEST_TIMEOUT_MIN_SECONDS: u64 = 1;
/// Maximum allowed request timeout in seconds
pub const REQUEST_TIMEOUT_MAX_SECONDS: u64 = 3600;
/// Maximum allowed default summary length in characters
pub const MAX_LENGTH_LIMIT: usize = 100_000;
