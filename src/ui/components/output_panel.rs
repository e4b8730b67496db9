//! Summary output panel component.
//!
//! Read-only view of the latest summary with Up/Down scrolling when focused.

use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct OutputPanel {
    text: String,
    scroll_offset: u16,
    focused: bool,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            scroll_offset: 0,
            focused: false,
        }
    }

    /// Replace the displayed summary and reset scrolling
    pub fn update_data(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.scroll_offset = 0;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Component for OutputPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Green } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Summary Output ")
            .style(Style::default().fg(border_color));

        let paragraph = Paragraph::new(self.text.as_str())
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));

        f.render_widget(paragraph, rect);
    }
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self::new()
    }
}
