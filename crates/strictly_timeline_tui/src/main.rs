//! Terminal UI for Strictly Timeline

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use strictly_timeline::GameEngine;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    let log_file = cli.log_file.as_deref().unwrap_or(config.log_file().as_path());
    init_tracing(log_file, config.log_filter())?;

    info!("Starting Strictly Timeline TUI");

    let cells: Vec<usize> = cli.moves.iter().map(|pos| pos.to_index()).collect();
    let engine = GameEngine::replay(&cells)?;
    info!(
        replayed = cells.len(),
        history_length = engine.history_length(),
        "Engine ready"
    );

    let app = App::new(engine, *config.show_cell_numbers());

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            return Err(err);
        }
    };

    let res = run_app(&mut terminal, app, read_key);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    info!("Exiting");
    res
}

/// Switches to the alternate screen and builds the terminal.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Waits briefly for a key press. Releases and repeats are skipped.
fn read_key() -> Result<Option<KeyCode>> {
    if event::poll(Duration::from_millis(250))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(Some(key.code));
    }
    Ok(None)
}

/// Sends tracing output to a file so it never draws over the UI.
fn init_tracing(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

/// Draw, then wait for the next key, until the user quits.
#[instrument(skip_all)]
fn run_app<B, K>(terminal: &mut Terminal<B>, mut app: App, mut next_key: K) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: FnMut() -> Result<Option<KeyCode>>,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Some(code) = next_key()?
            && app.handle_key(code) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
