/// Panes the user can cycle focus through with Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Input, // Input text area
    MaxLength, // Max summary length entry
    Output,    // Summary output pane
}

#[derive(Debug, Clone)]
pub enum Action {
    // Operation triggers
    Summarize,
    LoadModels,
    CheckConnection,

    // Operation completions, posted back by the task manager
    SummarizeCompleted(String),
    SummarizeFailed(String),
    ModelsLoaded(Vec<String>),
    ModelsLoadFailed(String),
    ConnectionChecked(bool),
    ConnectionCheckFailed(String),

    // Pane and model selection
    FocusNext,
    SelectNextModel,
    SelectPreviousModel,

    // Text operations
    ClearInput,
    ClearOutput,
    CopySummary,

    // File operations (paths confirmed through the file dialogs)
    LoadFromFile(String),
    SaveToFile(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Error(String),
    Warning(String),
    Info(String),
    Help,
    Logs,
    LoadFile,
    SaveFile,
}
