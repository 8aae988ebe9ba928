// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Museum Guide TUI.
//!
//! A terminal companion for a museum visit: browse the galleries, scan the
//! QR and NFC codes beside each artwork, follow guided tours, keep a list of
//! favourites and try the AR preview.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Task Worker** performs the slow simulated device work (scanning,
//!   camera start-up, sending the contact form) and reports back with events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.
//! Every navigation bumps the router generation, and results carrying an
//! older generation are discarded.

mod commander;
mod components;
mod config;
mod data;
mod devices;
mod error;
mod events;
mod logging;
mod model;
mod render;
mod router;
mod store;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs,
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    commander::Commander,
    components::{MountContext, Screen},
    config::AppConfig,
    data::{Museum, load_portfolio},
    events::{AppEvent, process_events},
    model::{favourites::Favourites, notice::Notice, portfolio::Portfolio},
    router::Router,
    store::{KeyValueStore, MemoryStore, SqliteStore},
    tasks::{AppTask, spawn_task_worker},
    theme::Theme,
};

const DATABASE_FILE_NAME: &str = "amuse.db";

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub museum: Arc<Museum>,
    pub portfolio: Arc<Portfolio>,
    pub favourites: Favourites,

    pub router: Router,
    pub screen: Screen,
    pub notice: Option<Notice>,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state, showing the home screen.
    pub fn new(
        config: AppConfig,
        museum: Arc<Museum>,
        portfolio: Arc<Portfolio>,
        favourites: Favourites,
        task_tx: Sender<AppTask>,
    ) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let router = Router::new();
        let screen = Screen::mount(
            router.current(),
            &MountContext {
                museum: &museum,
                portfolio: &portfolio,
                favourites: favourites.list(),
                generation: router.generation(),
                event_tx: &event_tx,
            },
        )?;

        Ok(Self {
            config,
            theme: Theme::default(),
            museum,
            portfolio,
            favourites,
            router,
            screen,
            notice: None,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration and the bundled museum content, opens the
/// favourites store, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let data_dir = config.data_dir();
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
    logging::init_logging(&data_dir, &config.log_level)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting");

    let museum = Arc::new(Museum::load().context("Failed to load museum content")?);
    let portfolio = Arc::new(load_portfolio().context("Failed to load portfolio content")?);

    let database_path = data_dir.join(DATABASE_FILE_NAME);
    let store: Box<dyn KeyValueStore> = match SqliteStore::open(&database_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(error = %e, path = %database_path.display(), "Favourites will not be saved");
            Box::new(MemoryStore::new())
        }
    };
    let favourites = Favourites::open(store);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, museum, portfolio, favourites, task_tx)
        .context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %e, "Application error");
    }
    info!("Stopped");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Paint the whole window, otherwise a thin outline of the default
    // background shows around the UI
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Best-effort: it is called during cleanup, so failures are ignored.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to run the simulated device work in [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to drive notices and animations.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    spawn_task_worker(&app.config, app.museum.clone(), task_rx, app.event_tx.clone());

    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // The tick is the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}
