//! Terminal UI for noughts

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::{CellSelector, GameSession, RandomSelector};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};

/// Longest wait for input while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the TUI game
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    let selector = match settings.seed() {
        Some(seed) => RandomSelector::seeded(*seed),
        None => RandomSelector::from_entropy(),
    };
    info!(
        think_delay_ms = settings.think_delay_ms(),
        seed = selector.seed(),
        "Starting noughts TUI"
    );
    let mut app = App::new(GameSession::with_selector(selector), settings.think_delay());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.session().history().len(), "Exiting noughts TUI");
    res
}

/// Draw, wait for input or the opponent's reply, repeat.
#[instrument(skip_all)]
fn run_app<S: CellSelector>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        let mut areas = [Rect::default(); 9];
        terminal.draw(|f| areas = ui::draw(f, app))?;
        app.set_cell_areas(areas);

        let timeout = app
            .opponent_due()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
