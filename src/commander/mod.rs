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

//! The `:` command line.
//!
//! Commands are vi-like and mirror what the screens offer through their keys,
//! so that any path, artwork or tour can be reached by name:
//!
//! | Command                  | Effect                                  |
//! |--------------------------|-----------------------------------------|
//! | `q`                      | quit                                    |
//! | `go <path>`              | navigate to a path, e.g. `go /tours`    |
//! | `back`                   | return to the previous screen           |
//! | `art <id>`               | open an artwork                         |
//! | `gallery <category>`     | open a gallery section                  |
//! | `tour <id>`              | open a tour                             |
//! | `scan <qr\|nfc> <code>`  | scan a code                             |
//! | `fav <id>` / `unfav <id>`| add or remove a favourite               |
//! | `clearfavs`              | remove every favourite                  |
//! | `help`                   | list the commands                       |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    error::{GuideError, GuideResult},
    events::AppEvent,
    model::{Category, ScanKind, notice::Notice},
    router::{NavParams, Route},
};

const HELP: &str = "q | go <path> | back | art <id> | gallery <category> | tour <id> | \
                    scan <qr|nfc> <code> | fav <id> | unfav <id> | clearfavs";

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the command line consumed
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting application event cannot be sent.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                debug!(command = %buffer, "Command");
                let event = match parse_command(&buffer) {
                    Ok(Some(event)) => event,
                    Ok(None) => return Ok(true),
                    Err(e) => AppEvent::Notify(Notice::from_error("Command", &e)),
                };
                event_tx.send(event)?;
            }

            // Everything else edits the command text.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

/// Turns a command line into the application event it stands for.
///
/// An empty line is `Ok(None)`.
///
/// # Errors
///
/// Returns [`GuideError::InvalidInput`] for unknown commands or missing
/// arguments, and [`GuideError::UnknownRoute`] for a path nothing answers to.
pub(crate) fn parse_command(buffer: &str) -> GuideResult<Option<AppEvent>> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();
    let goto = |route: Route| -> GuideResult<Option<AppEvent>> {
        Ok(Some(AppEvent::Navigate(route, NavParams::default())))
    };

    match parts.as_slice() {
        [] => Ok(None),

        ["q"] | ["quit"] => Ok(Some(AppEvent::ExitApplication)),

        ["go", path] => goto(Route::parse(path)?),
        ["back"] => Ok(Some(AppEvent::Back)),

        ["art", id] => goto(Route::Artwork(id.to_string())),
        ["gallery", category] => {
            let category = Category::from_id(category).ok_or_else(|| {
                GuideError::InvalidInput(format!("no gallery called '{}'", category))
            })?;
            goto(Route::Gallery(category))
        }
        ["tour", id] => goto(Route::Tour(id.to_string())),

        ["scan", kind, code] => {
            let kind = ScanKind::parse(kind).ok_or_else(|| {
                GuideError::InvalidInput(format!("scan kind must be qr or nfc, not '{}'", kind))
            })?;
            Ok(Some(AppEvent::RequestScan(kind, code.to_string())))
        }

        ["fav", id] => Ok(Some(AppEvent::AddFavourite(id.to_string()))),
        ["unfav", id] => Ok(Some(AppEvent::RemoveFavourite(id.to_string()))),
        ["clearfavs"] => Ok(Some(AppEvent::ClearFavourites)),

        ["help"] => Ok(Some(AppEvent::Notify(Notice::info("Commands", HELP)))),

        [cmd, ..] => Err(GuideError::InvalidInput(format!(
            "unknown command or arguments for '{}', try :help",
            cmd
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn parsed(buffer: &str) -> AppEvent {
        parse_command(buffer).unwrap().unwrap()
    }

    fn route_of(event: AppEvent) -> Route {
        match event {
            AppEvent::Navigate(route, params) => {
                assert_eq!(params, NavParams::default());
                route
            }
            other => panic!("expected navigation, got {:?}", other),
        }
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(route_of(parsed("go /tour/highlights-tour")), Route::Tour("highlights-tour".to_string()));
        assert_eq!(route_of(parsed("art david")), Route::Artwork("david".to_string()));
        assert_eq!(route_of(parsed("gallery historical")), Route::Gallery(Category::Historical));
        assert_eq!(route_of(parsed("tour art-history-tour")), Route::Tour("art-history-tour".to_string()));
        assert!(matches!(parsed("back"), AppEvent::Back));
        assert!(matches!(parsed("  q "), AppEvent::ExitApplication));
    }

    #[test]
    fn favourite_commands() {
        assert!(matches!(parsed("fav david"), AppEvent::AddFavourite(id) if id == "david"));
        assert!(matches!(parsed("unfav david"), AppEvent::RemoveFavourite(id) if id == "david"));
        assert!(matches!(parsed("clearfavs"), AppEvent::ClearFavourites));
    }

    #[test]
    fn scan_command() {
        assert!(matches!(
            parsed("scan NFC NFC004"),
            AppEvent::RequestScan(ScanKind::Nfc, code) if code == "NFC004"
        ));
        assert!(matches!(
            parse_command("scan barcode 123"),
            Err(GuideError::InvalidInput(_))
        ));
    }

    #[test]
    fn help_and_empty() {
        assert!(matches!(parsed("help"), AppEvent::Notify(_)));
        assert!(parse_command("   ").unwrap().is_none());
    }

    #[test]
    fn bad_commands_are_errors() {
        assert!(matches!(parse_command("go /nowhere"), Err(GuideError::UnknownRoute(_))));
        assert!(matches!(parse_command("gallery furniture"), Err(GuideError::InvalidInput(_))));
        assert!(matches!(parse_command("art"), Err(GuideError::InvalidInput(_))));
        assert!(matches!(parse_command("dance"), Err(GuideError::InvalidInput(_))));
    }

    #[test]
    fn colon_opens_and_enter_runs() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());

        for c in "back".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap());
        }
        assert_eq!(commander.input.value(), "back");

        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Back)));
    }

    #[test]
    fn invalid_command_becomes_notice() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('z')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Notify(_))));
    }

    #[test]
    fn escape_abandons_the_command() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
