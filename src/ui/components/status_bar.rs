//! Status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::KEY_HINTS;
use crate::ui::app_component::AppState;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let busy = state.summarizing || state.loading_models || state.checking_connection;

        let status_color = if busy {
            Color::Yellow
        } else if state.connected == Some(false) {
            Color::Red
        } else {
            Color::Gray
        };

        let mut spans = vec![Span::styled(
            state.status.clone(),
            Style::default().fg(status_color),
        )];
        if !busy {
            spans.push(Span::styled(
                format!("  •  {KEY_HINTS}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let status_bar = Paragraph::new(Line::from(spans));
        f.render_widget(status_bar, area);
    }
}
