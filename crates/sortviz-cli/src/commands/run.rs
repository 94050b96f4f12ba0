use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use sortviz_core::AppConfig;
use sortviz_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{BarsWidget, PopupWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Build the app before touching the terminal so config errors print normally
    let mut app = App::new(config.clone(), Theme::default())?;
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("sortviz"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(algorithm = %app.snapshot.algorithm, len = app.snapshot.array.len(), "TUI started");
    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.sync();

        // Draw UI
        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            BarsWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[1], app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, app);
            }
        })?;

        // Polling blocks for up to one tick; keep the runtime's other workers free
        if let AppEvent::Key(key) = tokio::task::block_in_place(|| event_handler.next())? {
            let action = handle_key_event(key, app, keymap);
            app.handle_action(action);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
