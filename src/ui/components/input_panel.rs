//! Input text panel component.
//!
//! A simple append-style editor: typed and pasted characters go to the end
//! of the buffer, Backspace removes the last character. The placeholder is
//! shown until the first edit, mirroring the original input field.

use crate::constants::INPUT_PLACEHOLDER;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct InputPanel {
    text: String,
    touched: bool,
    focused: bool,
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            touched: false,
            focused: true,
        }
    }

    /// Current input text (empty while the placeholder is showing)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer, e.g. after loading a file
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.touched = true;
    }

    /// Append pasted text to the buffer
    pub fn insert_text(&mut self, text: &str) {
        self.touched = true;
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.touched = true;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // Number of display lines the buffer occupies at the given width,
    // counting soft wraps. Used to keep the cursor line visible.
    fn display_lines(&self, width: u16) -> usize {
        let width = width.max(1) as usize;
        self.text
            .split('\n')
            .map(|line| line.chars().count().max(1).div_ceil(width))
            .sum()
    }
}

impl Component for InputPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.touched = true;
                self.text.push(c);
                Action::None
            }
            KeyCode::Enter => {
                self.touched = true;
                self.text.push('\n');
                Action::None
            }
            KeyCode::Backspace => {
                self.touched = true;
                self.text.pop();
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
            .title(" Input Text ")
            .style(Style::default().fg(border_color));

        let inner = block.inner(rect);

        let (content, content_style) = if self.text.is_empty() && !self.touched {
            (
                INPUT_PLACEHOLDER.to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.focused {
            (format!("{}█", self.text), Style::default().fg(Color::White))
        } else {
            (self.text.clone(), Style::default().fg(Color::White))
        };

        // Scroll so the end of the buffer stays visible while typing
        let total_lines = self.display_lines(inner.width) as u16;
        let scroll = total_lines.saturating_sub(inner.height);

        let paragraph = Paragraph::new(content)
            .block(block)
            .style(content_style)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        f.render_widget(paragraph, rect);
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}
