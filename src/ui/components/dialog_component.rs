//! Modal dialog component for various user interactions.
//!
//! Owns the currently visible dialog and its input buffers. Message dialogs
//! (error, warning, info), the help and logs viewers, and the load/save
//! path-entry dialogs all live here; the app decides which one to show via
//! [`DialogType`].

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::dialogs::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph};

enum ActiveDialog {
    None,
    Error(String),
    Warning(String),
    Info(String),
    Help,
    Logs,
    LoadFile { path: String },
    SaveFile { path: String },
}

pub struct DialogComponent {
    active: ActiveDialog,
    logs_scroll: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            active: ActiveDialog::None,
            logs_scroll: 0,
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.active, ActiveDialog::None)
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.active = match dialog_type {
            DialogType::Error(message) => ActiveDialog::Error(message),
            DialogType::Warning(message) => ActiveDialog::Warning(message),
            DialogType::Info(message) => ActiveDialog::Info(message),
            DialogType::Help => ActiveDialog::Help,
            DialogType::Logs => {
                self.logs_scroll = 0;
                ActiveDialog::Logs
            }
            DialogType::LoadFile => ActiveDialog::LoadFile { path: String::new() },
            DialogType::SaveFile => ActiveDialog::SaveFile { path: String::new() },
        };
    }

    pub fn hide(&mut self) {
        self.active = ActiveDialog::None;
    }

    // Path-entry key handling shared by the load and save dialogs
    fn handle_path_key(path: &mut String, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                path.push(c);
                None
            }
            KeyCode::Backspace => {
                path.pop();
                None
            }
            KeyCode::Enter if !path.trim().is_empty() => Some(path.trim().to_string()),
            _ => None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &mut self.active {
            ActiveDialog::None => Action::None,
            ActiveDialog::Error(_) | ActiveDialog::Warning(_) | ActiveDialog::Info(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            ActiveDialog::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::F(1) => Action::HideDialog,
                _ => Action::None,
            },
            ActiveDialog::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Up => {
                    self.logs_scroll = self.logs_scroll.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down => {
                    self.logs_scroll = self.logs_scroll.saturating_add(1);
                    Action::None
                }
                KeyCode::Home => {
                    self.logs_scroll = 0;
                    Action::None
                }
                _ => Action::None,
            },
            ActiveDialog::LoadFile { path } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                _ => match Self::handle_path_key(path, key) {
                    Some(confirmed) => Action::LoadFromFile(confirmed),
                    None => Action::None,
                },
            },
            ActiveDialog::SaveFile { path } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                _ => match Self::handle_path_key(path, key) {
                    Some(confirmed) => Action::SaveToFile(confirmed),
                    None => Action::None,
                },
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.active {
            ActiveDialog::None => {}
            ActiveDialog::Error(message) => {
                render_message_dialog(f, rect, " Error ", message, Color::Red);
            }
            ActiveDialog::Warning(message) => {
                render_message_dialog(f, rect, " Warning ", message, Color::Yellow);
            }
            ActiveDialog::Info(message) => {
                render_message_dialog(f, rect, " Info ", message, Color::Cyan);
            }
            ActiveDialog::Help => render_help_dialog(f, rect),
            ActiveDialog::Logs => render_logs_dialog(f, rect, &self.logger, self.logs_scroll),
            ActiveDialog::LoadFile { path } => {
                render_path_dialog(f, rect, " Load Input from File ", path);
            }
            ActiveDialog::SaveFile { path } => {
                render_path_dialog(f, rect, " Save Summary to File ", path);
            }
        }
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn render_message_dialog(f: &mut Frame, rect: Rect, title: &str, message: &str, color: Color) {
    let area = LayoutManager::centered_rect(60, 20, rect);
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .block(create_dialog_block(title, color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_path_dialog(f: &mut Frame, rect: Rect, title: &str, path: &str) {
    let area = LayoutManager::centered_rect(60, 20, rect);
    f.render_widget(Clear, area);

    let block = create_dialog_block(title, Color::Green);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input_rect = Rect::new(inner.x, inner.y, inner.width, 3.min(inner.height));
    f.render_widget(create_input_paragraph(path, "Path"), input_rect);

    if inner.height > 4 {
        let instructions_rect = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let instructions = create_instructions_paragraph(&[
            ("Enter", Color::Green, " confirm  "),
            ("Esc", Color::Red, " cancel"),
        ]);
        f.render_widget(instructions, instructions_rect);
    }
}

fn render_help_dialog(f: &mut Frame, rect: Rect) {
    let area = LayoutManager::centered_rect(70, 70, rect);
    f.render_widget(Clear, area);

    let help_text = "\
Ctrl+S      Summarize input text
Ctrl+R      Refresh model list
Ctrl+T      Check Ollama connection
Ctrl+N/P    Next / previous model
Tab         Cycle focus (input, max length, output)
Ctrl+O      Load input from file
Ctrl+E      Save summary to file
Ctrl+Y      Copy summary to clipboard
Ctrl+L      Clear input
Ctrl+K      Clear output
F1          This help
F2          Session logs
Esc         Close dialog / quit
Ctrl+C      Quit";

    let paragraph = Paragraph::new(help_text)
        .block(create_dialog_block(" Help - Press 'Esc' or 'q' to close ", Color::Cyan))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_logs_dialog(f: &mut Frame, rect: Rect, logger: &Logger, scroll: usize) {
    let area = LayoutManager::centered_rect(80, 80, rect);
    f.render_widget(Clear, area);

    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.iter().skip(scroll).cloned().collect::<Vec<_>>().join("\n")
    };

    let paragraph = Paragraph::new(content)
        .block(create_dialog_block(DIALOG_TITLE_LOGS, Color::Magenta))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
