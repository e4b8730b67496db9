use crate::constants::{
    MODELS_EMPTY_PLACEHOLDER, MODELS_ERROR_PLACEHOLDER, MODELS_LOADING_PLACEHOLDER, STATUS_CHECKING_CONNECTION,
    STATUS_CONNECTED, STATUS_CONNECTION_FAILED, STATUS_COPIED, STATUS_ERROR, STATUS_LOADING_MODELS,
    STATUS_NOT_REACHABLE, STATUS_NO_MODELS, STATUS_PROCESSING, STATUS_READY, WARN_BAD_MAX_LENGTH, WARN_EMPTY_INPUT,
    WARN_NO_MODEL, WARN_NO_SUMMARY_COPY, WARN_NO_SUMMARY_SAVE,
};
use crate::config::Config;
use crate::logger::Logger;
use crate::summarizer::SummarizerService;
use crate::ui::components::{DialogComponent, InputPanel, OutputPanel, SettingsBar, StatusBar};
use crate::utils::text::truncate;
use crate::ui::core::{
    actions::{Action, DialogType, FocusPane},
    event_handler::EventType,
    task_manager::{OperationKind, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub models: Vec<String>,
    /// Shown in the model selector while `models` is empty
    pub model_placeholder: String,
    pub output: String,
    pub status: String,
    pub connected: Option<bool>,
    pub summarizing: bool,
    pub loading_models: bool,
    pub checking_connection: bool,
    pub focus: FocusPane,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            model_placeholder: MODELS_LOADING_PLACEHOLDER.to_string(),
            output: String::new(),
            status: STATUS_READY.to_string(),
            connected: None,
            summarizing: false,
            loading_models: false,
            checking_connection: false,
            focus: FocusPane::default(),
        }
    }
}

pub struct AppComponent {
    // Component composition
    settings: SettingsBar,
    input_panel: InputPanel,
    output_panel: OutputPanel,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    service: SummarizerService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    clipboard: Option<Clipboard>,

    // Simple UI state
    should_quit: bool,
    initial_probe: bool,
}

impl AppComponent {
    pub fn new(mut service: SummarizerService, config: &Config) -> Self {
        let settings = SettingsBar::new(config.ui.default_max_length, MODELS_LOADING_PLACEHOLDER.to_string());
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();
        service.set_logger(logger.clone());

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            settings,
            input_panel: InputPanel::new(),
            output_panel: OutputPanel::new(),
            dialog,
            state: AppState::default(),
            service,
            task_manager,
            background_action_rx,
            logger,
            clipboard: Clipboard::new().ok(),
            should_quit: false,
            initial_probe: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of tracked background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Current application state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Name of the currently selected model, if any
    pub fn selected_model(&self) -> Option<&str> {
        self.settings.selected_model()
    }

    /// Current input buffer contents
    pub fn input_text(&self) -> &str {
        self.input_panel.text()
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Probe the backend on startup; a successful check loads the models
    pub fn trigger_initial_check(&mut self) {
        self.logger.log("App: Starting initial connection check".to_string());
        self.initial_probe = true;
        self.start_check_connection();
    }

    /// Update all components with current data and focus
    fn sync_component_data(&mut self) {
        self.settings.update_data(
            self.state.models.clone(),
            self.state.model_placeholder.clone(),
            self.state.connected,
        );
        self.output_panel.update_data(self.state.output.clone());

        self.input_panel.set_focused(self.state.focus == FocusPane::Input);
        self.settings
            .set_max_length_focused(self.state.focus == FocusPane::MaxLength);
        self.output_panel.set_focused(self.state.focus == FocusPane::Output);
    }

    /// Handle global keyboard shortcuts. Only modifier and function keys are
    /// intercepted here so plain typing always reaches the focused pane.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('s') if ctrl => Action::Summarize,
            KeyCode::Char('r') if ctrl => Action::LoadModels,
            KeyCode::Char('t') if ctrl => Action::CheckConnection,
            KeyCode::Char('n') if ctrl => Action::SelectNextModel,
            KeyCode::Char('p') if ctrl => Action::SelectPreviousModel,
            KeyCode::Char('o') if ctrl => Action::ShowDialog(DialogType::LoadFile),
            KeyCode::Char('e') if ctrl => Action::ShowDialog(DialogType::SaveFile),
            KeyCode::Char('y') if ctrl => Action::CopySummary,
            KeyCode::Char('l') if ctrl => Action::ClearInput,
            KeyCode::Char('k') if ctrl => Action::ClearOutput,
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::F(2) => Action::ShowDialog(DialogType::Logs),
            KeyCode::Tab => Action::FocusNext,
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let result = match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }

            // Operation triggers
            Action::Summarize => {
                self.start_summarize();
                Action::None
            }
            Action::LoadModels => {
                self.start_load_models();
                Action::None
            }
            Action::CheckConnection => {
                self.start_check_connection();
                Action::None
            }

            // Operation completions
            Action::SummarizeCompleted(summary) => {
                self.logger
                    .log(format!("Summarize: Completed ({} chars)", summary.len()));
                self.state.summarizing = false;
                self.state.output = summary;
                self.state.status = STATUS_READY.to_string();
                Action::None
            }
            Action::SummarizeFailed(error) => {
                self.logger.log(format!("Summarize: Failed: {error}"));
                self.state.summarizing = false;
                self.state.status = STATUS_ERROR.to_string();
                self.dialog
                    .show(DialogType::Error(format!("Summarization failed: {error}")));
                Action::None
            }
            Action::ModelsLoaded(models) => {
                self.logger.log(format!("Models: Loaded {} models", models.len()));
                self.state.loading_models = false;
                if models.is_empty() {
                    self.state.models.clear();
                    self.state.model_placeholder = MODELS_EMPTY_PLACEHOLDER.to_string();
                    self.state.status = STATUS_NO_MODELS.to_string();
                } else {
                    self.state.status = format!("● Loaded {} models", models.len());
                    self.state.models = models;
                }
                Action::None
            }
            Action::ModelsLoadFailed(error) => {
                self.logger.log(format!("Models: Load failed: {error}"));
                self.state.loading_models = false;
                self.state.models.clear();
                self.state.model_placeholder = MODELS_ERROR_PLACEHOLDER.to_string();
                self.state.status = format!("● Error loading models: {}", truncate(&error, 120));
                Action::None
            }
            Action::ConnectionChecked(connected) => {
                self.logger.log(format!("Connection: Checked, connected={connected}"));
                self.state.checking_connection = false;
                self.state.connected = Some(connected);

                if self.initial_probe {
                    self.initial_probe = false;
                    if connected {
                        // Startup flow: a reachable backend loads the models
                        self.start_load_models();
                    } else {
                        self.state.status = STATUS_NOT_REACHABLE.to_string();
                    }
                } else if connected {
                    self.state.status = STATUS_CONNECTED.to_string();
                } else {
                    self.state.status = STATUS_CONNECTION_FAILED.to_string();
                }
                Action::None
            }
            Action::ConnectionCheckFailed(error) => {
                self.logger.log(format!("Connection: Check errored: {error}"));
                self.state.checking_connection = false;
                self.initial_probe = false;
                self.state.connected = Some(false);
                self.state.status = format!("● Connection error: {}", truncate(&error, 120));
                Action::None
            }

            // Pane and model selection
            Action::FocusNext => {
                self.state.focus = match self.state.focus {
                    FocusPane::Input => FocusPane::MaxLength,
                    FocusPane::MaxLength => FocusPane::Output,
                    FocusPane::Output => FocusPane::Input,
                };
                Action::None
            }
            Action::SelectNextModel => {
                self.settings.select_next();
                if let Some(model) = self.settings.selected_model() {
                    self.logger.log(format!("Models: Selected '{model}'"));
                }
                Action::None
            }
            Action::SelectPreviousModel => {
                self.settings.select_previous();
                if let Some(model) = self.settings.selected_model() {
                    self.logger.log(format!("Models: Selected '{model}'"));
                }
                Action::None
            }

            // Text operations
            Action::ClearInput => {
                self.input_panel.clear();
                Action::None
            }
            Action::ClearOutput => {
                self.state.output.clear();
                Action::None
            }
            Action::CopySummary => {
                self.copy_summary();
                Action::None
            }

            // File operations
            Action::LoadFromFile(path) => {
                self.dialog.hide();
                match std::fs::read_to_string(&path) {
                    Ok(content) => {
                        self.logger.log(format!("File: Loaded input from {path}"));
                        self.input_panel.set_text(content);
                    }
                    Err(e) => {
                        self.dialog
                            .show(DialogType::Error(format!("Could not load file: {e}")));
                    }
                }
                Action::None
            }
            Action::SaveToFile(path) => {
                self.dialog.hide();
                match std::fs::write(&path, &self.state.output) {
                    Ok(()) => {
                        self.logger.log(format!("File: Saved summary to {path}"));
                        self.state.status = format!("Summary saved to {path}");
                    }
                    Err(e) => {
                        self.dialog
                            .show(DialogType::Error(format!("Could not save file: {e}")));
                    }
                }
                Action::None
            }

            // UI operations
            Action::ShowDialog(dialog_type) => {
                // Saving makes no sense without a summary
                if matches!(dialog_type, DialogType::SaveFile) && self.state.output.trim().is_empty() {
                    self.dialog.show(DialogType::Warning(WARN_NO_SUMMARY_SAVE.to_string()));
                } else {
                    self.dialog.show(dialog_type);
                }
                Action::None
            }
            Action::HideDialog => {
                self.dialog.hide();
                Action::None
            }

            // Pass through anything else
            other => other,
        };

        self.sync_component_data();
        result
    }

    fn start_summarize(&mut self) {
        if self.state.summarizing || self.task_manager.is_running(OperationKind::Summarize) {
            self.logger.log("Summarize: Already in progress, ignoring".to_string());
            return;
        }

        let input = self.input_panel.text().trim().to_string();
        if input.is_empty() {
            self.dialog.show(DialogType::Warning(WARN_EMPTY_INPUT.to_string()));
            return;
        }

        let Some(max_length) = self.settings.max_length_value() else {
            self.dialog.show(DialogType::Warning(WARN_BAD_MAX_LENGTH.to_string()));
            return;
        };

        let Some(model) = self.settings.selected_model().map(str::to_string) else {
            self.dialog.show(DialogType::Warning(WARN_NO_MODEL.to_string()));
            return;
        };

        self.logger.log(format!(
            "Summarize: Starting with model '{model}' (max length {max_length})"
        ));
        self.state.summarizing = true;
        self.state.status = STATUS_PROCESSING.to_string();

        let service = self.service.clone();
        self.task_manager.submit(
            OperationKind::Summarize,
            format!("Summarize with {model}"),
            move || async move { service.summarize(&model, &input, max_length).await },
            Action::SummarizeCompleted,
            Action::SummarizeFailed,
        );
    }

    fn start_load_models(&mut self) {
        if self.state.loading_models || self.task_manager.is_running(OperationKind::LoadModels) {
            self.logger.log("Models: Load already in progress, ignoring".to_string());
            return;
        }

        self.logger.log("Models: Starting background load".to_string());
        self.state.loading_models = true;
        self.state.model_placeholder = MODELS_LOADING_PLACEHOLDER.to_string();
        self.state.status = STATUS_LOADING_MODELS.to_string();

        let service = self.service.clone();
        self.task_manager.submit(
            OperationKind::LoadModels,
            "Load model list".to_string(),
            move || async move { service.list_models().await },
            Action::ModelsLoaded,
            Action::ModelsLoadFailed,
        );
    }

    fn start_check_connection(&mut self) {
        if self.state.checking_connection || self.task_manager.is_running(OperationKind::CheckConnection) {
            self.logger
                .log("Connection: Check already in progress, ignoring".to_string());
            return;
        }

        self.logger.log("Connection: Starting background check".to_string());
        self.state.checking_connection = true;
        self.state.status = STATUS_CHECKING_CONNECTION.to_string();

        let service = self.service.clone();
        self.task_manager.submit(
            OperationKind::CheckConnection,
            "Check backend connection".to_string(),
            move || async move { Ok::<bool, anyhow::Error>(service.check_connection().await) },
            Action::ConnectionChecked,
            Action::ConnectionCheckFailed,
        );
    }

    fn copy_summary(&mut self) {
        if self.state.output.trim().is_empty() {
            self.dialog.show(DialogType::Warning(WARN_NO_SUMMARY_COPY.to_string()));
            return;
        }

        match &mut self.clipboard {
            Some(clipboard) => match clipboard.set_text(self.state.output.clone()) {
                Ok(()) => {
                    self.logger.log("Clipboard: Copied summary".to_string());
                    self.state.status = STATUS_COPIED.to_string();
                }
                Err(e) => {
                    self.state.status = format!("● Copy failed: {e}");
                }
            },
            None => {
                self.state.status = "● Clipboard not available".to_string();
            }
        }
    }

    /// Process background actions from the task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (task_id, description) in completed_tasks {
            self.logger
                .log(format!("Background: Task {task_id} finished ({description})"));
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    // Global shortcuts first; they never swallow plain typing
                    let global_action = self.handle_global_key(key);

                    if !matches!(global_action, Action::None) {
                        global_action
                    } else {
                        match self.state.focus {
                            FocusPane::Input => self.input_panel.handle_key_events(key),
                            FocusPane::MaxLength => self.settings.handle_key_events(key),
                            FocusPane::Output => self.output_panel.handle_key_events(key),
                        }
                    }
                }
            }
            EventType::Paste(text) => {
                if !self.dialog.is_visible() && self.state.focus == FocusPane::Input {
                    self.input_panel.insert_text(&text);
                }
                Action::None
            }
            EventType::Resize(_, _)
            | EventType::Tick
            | EventType::Render
            | EventType::Other => Action::None,
        };

        let _ = self.handle_app_action(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.settings.render(f, chunks[0]);
        self.input_panel.render(f, chunks[1]);
        self.output_panel.render(f, chunks[2]);
        StatusBar::render(f, chunks[3], &self.state);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
