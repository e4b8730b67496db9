use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use summarist::constants::INPUT_PLACEHOLDER;
use summarist::ui::app_component::AppState;
use summarist::ui::components::{InputPanel, OutputPanel, SettingsBar, StatusBar};
use summarist::ui::core::Component;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_input_panel_renders_placeholder_until_touched() {
    let mut panel = InputPanel::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    terminal.draw(|f| panel.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains(INPUT_PLACEHOLDER));

    panel.handle_key_events(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
    terminal.draw(|f| panel.render(f, f.area())).unwrap();
    assert!(!buffer_text(&terminal).contains(INPUT_PLACEHOLDER));
}

#[test]
fn test_input_panel_editing() {
    let mut panel = InputPanel::new();

    for c in "hi".chars() {
        panel.handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    panel.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    panel.handle_key_events(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert_eq!(panel.text(), "hi\nx");

    panel.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert_eq!(panel.text(), "hi\n");

    panel.insert_text("pasted");
    assert_eq!(panel.text(), "hi\npasted");
}

#[test]
fn test_input_panel_ignores_keys_when_unfocused() {
    let mut panel = InputPanel::new();
    panel.set_focused(false);

    panel.handle_key_events(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
    assert_eq!(panel.text(), "");
}

#[test]
fn test_settings_bar_model_selection_cycles() {
    let mut bar = SettingsBar::new(500, "Loading...".to_string());
    bar.update_data(
        vec!["llama3".to_string(), "mistral".to_string()],
        "Loading...".to_string(),
        Some(true),
    );

    assert_eq!(bar.selected_model(), Some("llama3"));
    bar.select_next();
    assert_eq!(bar.selected_model(), Some("mistral"));
    bar.select_next();
    assert_eq!(bar.selected_model(), Some("llama3"));
    bar.select_previous();
    assert_eq!(bar.selected_model(), Some("mistral"));
}

#[test]
fn test_settings_bar_max_length_entry() {
    let mut bar = SettingsBar::new(500, "Loading...".to_string());
    assert_eq!(bar.max_length_value(), Some(500));

    // Entry only accepts digits while focused
    bar.handle_key_events(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    assert_eq!(bar.max_length_text(), "500");

    bar.set_max_length_focused(true);
    bar.handle_key_events(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    bar.handle_key_events(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(bar.max_length_text(), "5001");

    for _ in 0..4 {
        bar.handle_key_events(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    }
    assert_eq!(bar.max_length_text(), "");
    assert_eq!(bar.max_length_value(), None, "empty entry is not a valid length");
}

#[test]
fn test_settings_bar_renders_placeholder_without_models() {
    let mut bar = SettingsBar::new(500, "Error loading models".to_string());
    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

    terminal.draw(|f| bar.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("Error loading models"));
}

#[test]
fn test_output_panel_renders_summary() {
    let mut panel = OutputPanel::new();
    panel.update_data("Short summary.".to_string());

    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
    terminal.draw(|f| panel.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("Short summary."));
}

#[test]
fn test_status_bar_shows_status_and_hints_when_idle() {
    let state = AppState::default();
    let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();

    terminal
        .draw(|f| StatusBar::render(f, f.area(), &state))
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Ready"));
    assert!(text.contains("summarize"));
}

#[test]
fn test_status_bar_hides_hints_while_busy() {
    let state = AppState {
        summarizing: true,
        status: "Processing...".to_string(),
        ..Default::default()
    };
    let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();

    terminal
        .draw(|f| StatusBar::render(f, f.area(), &state))
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Processing..."));
    assert!(!text.contains("summarize"));
}
