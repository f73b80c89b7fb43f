//! Terminal setup, teardown and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Poll interval for terminal events.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(config);

    let res = event_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(
        steps = app.controller().history_len(),
        status = %app.controller().status(),
        "Rewind TUI exited"
    );
    res
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// One event at a time: draw, wait for input, apply it.
fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }

    Ok(())
}
