use std::sync::Arc;

use async_trait::async_trait;
use summarist::backend::{BackendError, SummaryBackend};
use summarist::config::Config;
use summarist::constants::{MODELS_ERROR_PLACEHOLDER, STATUS_CONNECTED, STATUS_CONNECTION_FAILED, STATUS_READY};
use summarist::summarizer::SummarizerService;
use summarist::ui::app_component::{AppComponent, AppState};
use summarist::ui::core::actions::{Action, FocusPane};

/// Backend that is never actually called; scenario tests inject completion
/// actions directly, the way the task manager delivers them.
struct IdleBackend;

#[async_trait]
impl SummaryBackend for IdleBackend {
    fn backend_type(&self) -> &str {
        "idle"
    }

    async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        Ok(Vec::new())
    }

    async fn chat(&self, _model: &str, _prompt: &str) -> Result<String, BackendError> {
        Ok(String::new())
    }
}

fn test_app() -> AppComponent {
    let service = SummarizerService::new(Arc::new(IdleBackend));
    AppComponent::new(service, &Config::default())
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(!state.summarizing, "Default AppState should not be summarizing");
    assert!(state.models.is_empty(), "Default AppState should have no models");
    assert_eq!(state.status, STATUS_READY);
    assert_eq!(state.focus, FocusPane::Input);
}

#[tokio::test]
async fn test_models_loaded_selects_first_model() {
    let mut app = test_app();

    app.handle_app_action(Action::ModelsLoaded(vec!["llama3".to_string(), "mistral".to_string()]));

    assert_eq!(app.state().models, vec!["llama3", "mistral"]);
    assert_eq!(app.selected_model(), Some("llama3"));
    assert_eq!(app.state().status, "● Loaded 2 models");
    assert!(!app.state().loading_models);
}

#[tokio::test]
async fn test_models_load_failure_shows_error_placeholder() {
    let mut app = test_app();

    app.handle_app_action(Action::ModelsLoadFailed("connection refused".to_string()));

    assert!(app.state().models.is_empty());
    assert_eq!(app.selected_model(), None);
    assert_eq!(app.state().model_placeholder, MODELS_ERROR_PLACEHOLDER);
    assert!(app.state().status.contains("connection refused"));
}

#[tokio::test]
async fn test_summarize_completed_updates_output_and_resets_status() {
    let mut app = test_app();

    app.handle_app_action(Action::SummarizeCompleted("Short summary.".to_string()));

    assert_eq!(app.state().output, "Short summary.");
    assert!(!app.state().summarizing, "busy flag must clear so the user can retry");
    assert_eq!(app.state().status, STATUS_READY);
}

#[tokio::test]
async fn test_summarize_failure_shows_error_dialog() {
    let mut app = test_app();

    app.handle_app_action(Action::SummarizeFailed("model 'nope' not found".to_string()));

    assert!(!app.state().summarizing);
    assert!(app.is_dialog_visible(), "failure must surface an error dialog");
    assert!(app.state().output.is_empty());
}

#[tokio::test]
async fn test_connection_check_results_update_status() {
    let mut app = test_app();

    app.handle_app_action(Action::ConnectionChecked(true));
    assert_eq!(app.state().status, STATUS_CONNECTED);
    assert_eq!(app.state().connected, Some(true));

    app.handle_app_action(Action::ConnectionChecked(false));
    assert_eq!(app.state().status, STATUS_CONNECTION_FAILED);
    assert_eq!(app.state().connected, Some(false));
}

#[test]
fn test_summarize_with_empty_input_warns_without_spawning() {
    let mut app = test_app();

    app.handle_app_action(Action::Summarize);

    assert!(app.is_dialog_visible(), "empty input should raise a warning dialog");
    assert_eq!(app.active_task_count(), 0, "no background task may be spawned");
    assert!(!app.state().summarizing);
}

#[test]
fn test_focus_cycles_through_panes() {
    let mut app = test_app();
    assert_eq!(app.state().focus, FocusPane::Input);

    app.handle_app_action(Action::FocusNext);
    assert_eq!(app.state().focus, FocusPane::MaxLength);

    app.handle_app_action(Action::FocusNext);
    assert_eq!(app.state().focus, FocusPane::Output);

    app.handle_app_action(Action::FocusNext);
    assert_eq!(app.state().focus, FocusPane::Input);
}

#[test]
fn test_clear_output_empties_summary() {
    let mut app = test_app();

    app.handle_app_action(Action::SummarizeCompleted("Short summary.".to_string()));
    assert!(!app.state().output.is_empty());

    app.handle_app_action(Action::ClearOutput);
    assert!(app.state().output.is_empty());
}
