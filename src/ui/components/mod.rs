//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod input_panel;
pub mod output_panel;
pub mod settings_bar;
pub mod status_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use input_panel::InputPanel;
pub use output_panel::OutputPanel;
pub use settings_bar::SettingsBar;
pub use status_bar::StatusBar;
