//! Settings bar component: model selector, max-length entry, connection
//! indicator.

use crate::constants::MAX_LENGTH_ENTRY_MAX_DIGITS;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct SettingsBar {
    models: Vec<String>,
    /// Shown in the selector while `models` is empty
    placeholder: String,
    selected: usize,
    max_length: String,
    max_length_focused: bool,
    connected: Option<bool>,
}

impl SettingsBar {
    pub fn new(default_max_length: usize, placeholder: String) -> Self {
        Self {
            models: Vec::new(),
            placeholder,
            selected: 0,
            max_length: default_max_length.to_string(),
            max_length_focused: false,
            connected: None,
        }
    }

    /// Update the model list and connection state from app state
    pub fn update_data(&mut self, models: Vec<String>, placeholder: String, connected: Option<bool>) {
        if self.models != models {
            self.selected = 0;
        }
        self.models = models;
        self.placeholder = placeholder;
        self.connected = connected;
    }

    /// Name of the currently selected model, if any are loaded
    pub fn selected_model(&self) -> Option<&str> {
        self.models.get(self.selected).map(String::as_str)
    }

    /// Parsed max-length entry; `None` when not a positive number
    pub fn max_length_value(&self) -> Option<usize> {
        match self.max_length.parse::<usize>() {
            Ok(value) if value > 0 => Some(value),
            _ => None,
        }
    }

    /// Raw text of the max-length entry
    pub fn max_length_text(&self) -> &str {
        &self.max_length
    }

    pub fn set_max_length_focused(&mut self, focused: bool) {
        self.max_length_focused = focused;
    }

    pub fn select_next(&mut self) {
        if !self.models.is_empty() {
            self.selected = (self.selected + 1) % self.models.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.models.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.models.len() - 1);
        }
    }

    fn model_display(&self) -> String {
        match self.selected_model() {
            Some(name) => format!("{} ({}/{})", name, self.selected + 1, self.models.len()),
            None => self.placeholder.clone(),
        }
    }
}

impl Component for SettingsBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.max_length_focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.max_length.len() < MAX_LENGTH_ENTRY_MAX_DIGITS {
                    self.max_length.push(c);
                }
                Action::None
            }
            KeyCode::Backspace => {
                self.max_length.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::settings_layout(rect);

        // Model selector
        let model_color = if self.models.is_empty() { Color::DarkGray } else { Color::White };
        let model = Paragraph::new(self.model_display())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Model (^N/^P) "),
            )
            .style(Style::default().fg(model_color));
        f.render_widget(model, chunks[0]);

        // Max length entry
        let (entry_text, entry_color) = if self.max_length_focused {
            (format!("{}█", self.max_length), Color::Green)
        } else {
            (self.max_length.clone(), Color::Gray)
        };
        let max_length = Paragraph::new(entry_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Max Length ")
                    .style(Style::default().fg(entry_color)),
            )
            .style(Style::default().fg(Color::White));
        f.render_widget(max_length, chunks[1]);

        // Connection indicator
        let (conn_text, conn_color) = match self.connected {
            Some(true) => ("● online", Color::Green),
            Some(false) => ("● offline", Color::Red),
            None => ("● unknown", Color::DarkGray),
        };
        let connection = Paragraph::new(conn_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Ollama "),
            )
            .style(Style::default().fg(conn_color));
        f.render_widget(connection, chunks[2]);
    }
}
