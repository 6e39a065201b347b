//! Interactive terminal UI: entry form and the three trip views.

pub mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use wayfarer_core::SortKey;

use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Launch the interactive TUI.
pub fn run(mut app: App) -> Result<()> {
    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Clear status message on any keypress.
                app.status_message = None;

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => app.navigate_back(),
                    KeyCode::Enter => app.navigate_enter(),
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Up | KeyCode::BackTab => app.move_up(),
                    KeyCode::Down | KeyCode::Tab => app.move_down(),
                    KeyCode::Left => app.adjust(-1),
                    KeyCode::Right => app.adjust(1),
                    KeyCode::Char(c) => {
                        if !app.type_char(c) {
                            handle_view_key(app, c);
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Single-key shortcuts inside the trip views.
fn handle_view_key(app: &mut App, c: char) {
    match (app.state.name(), c) {
        ("home", _) => {}
        (_, 'q') => app.navigate_back(),
        ("itinerary", 'j') => app.move_down(),
        ("itinerary", 'k') => app.move_up(),
        ("restaurants", '1') => app.set_sort(SortKey::Rating),
        ("restaurants", '2') => app.set_sort(SortKey::Reviews),
        ("restaurants", '3') => app.set_sort(SortKey::GoogleRating),
        ("explorer", '/') => app.start_search(),
        ("explorer", 'm') => app.cycle_month(),
        ("explorer", 's') => app.cycle_season(),
        ("explorer", 'r') => app.reset_filters(),
        _ => {}
    }
}
