//! Terminal setup and the main event loop.

use crate::config::Config;
use crate::summarizer::SummarizerService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the application: set up the terminal, drive the event loop, restore
/// the terminal on the way out.
pub async fn run_app(service: SummarizerService, config: &Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let mut app = AppComponent::new(service, config);
    let mut event_handler = EventHandler::new();

    // Probe the backend automatically on startup
    app.trigger_initial_check();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Paste(_) | EventType::Resize(_, _)) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                // Deliver background completions on tick
                let background_actions = app.process_background_actions();

                for action in background_actions {
                    match app.handle_app_action(action) {
                        Action::Quit => return Ok(()),
                        _ => {
                            needs_render = true;
                        }
                    }
                }
                // Don't render on idle ticks
            }
            EventType::Render => {
                needs_render = true;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
