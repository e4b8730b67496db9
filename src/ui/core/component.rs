use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Interface shared by all interactive UI pieces.
///
/// A component turns key events into [`Action`]s and draws itself into a
/// frame region. State shared between components lives in the app; a
/// component only owns its local editing and scrolling state.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
