//! HS Finder TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hsfinder_tui::api_client::ApiClient;
use hsfinder_tui::config::HsfinderConfig;
use hsfinder_tui::controller;
use hsfinder_tui::error::TuiError;
use hsfinder_tui::events::{queue_tick, TuiEvent};
use hsfinder_tui::keys::map_key;
use hsfinder_tui::state::{App, Command};
use hsfinder_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

type Term = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = HsfinderConfig::load()?;
    init_logging(&config)?;
    tracing::info!(api_base_url = config.base_url(), "starting hsfinder-tui");

    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let mut ticker = tokio::time::interval(TICK_RATE);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                queue_tick(&event_tx);
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut terminal, &mut app, event).await? {
                    break;
                }
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

fn init_logging(config: &HsfinderConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hsfinder_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))
}

fn setup_terminal() -> Result<Term, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        sender.blocking_send(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

async fn handle_event(terminal: &mut Term, app: &mut App, event: TuiEvent) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key, app.editing()) {
                let command = app.apply(action);
                return run_command(terminal, app, command).await;
            }
        }
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    Ok(false)
}

/// Perform the request behind `command`, blocking input until it settles.
async fn run_command(terminal: &mut Term, app: &mut App, command: Command) -> Result<bool, TuiError> {
    if command == Command::Quit {
        return Ok(true);
    }
    if let Some(label) = command.busy_label() {
        app.busy = Some(label);
        terminal.draw(|f| render_view(f, app))?;
    }

    match command {
        Command::Search(language) => {
            let form = app.search_panel(language).form.clone();
            let submission = controller::submit_search(&app.api, &form, language).await;
            app.record_search(language, submission);
        }
        Command::SearchOrganizations => {
            let form = app.organization_panel.form.clone();
            let submission = controller::submit_organizations(&app.api, &form).await;
            app.record_organizations(submission);
        }
        Command::CheckHealth => {
            let status = controller::check_health(&app.api).await;
            app.record_health(status);
        }
        Command::None | Command::Quit => {}
    }

    app.busy = None;
    Ok(false)
}
