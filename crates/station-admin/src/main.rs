use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod validation;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    ApiMiddleware, FormMiddleware, KeyboardMiddleware, LoggingMiddleware, NavigationMiddleware,
    SessionMiddleware,
};
use state::AppState;
use station_admin_client::MockApiClient;
use station_admin_config::{AppConfig, SessionStore};
use store::Store;

/// How long to wait for terminal input before checking for settled requests
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting station-admin (logging to {:?})", log_file);

    let config = AppConfig::load();
    log::info!("Using API at {}", config.api_base_url);
    let api = MockApiClient::new(&config.api_base_url, config.request_timeout())
        .context("Failed to create API client")?;
    let sessions = SessionStore::open_default()?;

    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(FormMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(api)?));
    store.add_middleware(Box::new(SessionMiddleware::new(sessions)));

    // Redraw only after a committed state change
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    store.subscribe(move |_| flag.set(true));

    store.dispatch(Action::Global(GlobalAction::Bootstrap));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, &dirty);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting station-admin");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    dirty: &Cell<bool>,
) -> anyhow::Result<()> {
    loop {
        if dirty.replace(false) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), area, frame);
            })?;
        }

        // Check if we should quit
        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }

        // Settlements posted by API tasks
        store.process_pending();
    }

    Ok(())
}
