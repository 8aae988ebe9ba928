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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    events::{AppEvent, AppEventProcessor, Focus},
    router::{NavParams, Route},
};

/// Routes a key press to whatever should see it.
///
/// The command line gets first refusal while it is open, and can only be
/// opened when no input field is focused. Otherwise Esc
/// dismisses a visible notice, then the current screen sees the key, and
/// finally the global shortcuts apply unless the screen had an input field
/// focused.
///
/// # Errors
///
/// Returns an error if an event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    let focus = app.screen.focus();
    let commander_allowed = app.commander.active() || focus == Focus::None;
    if commander_allowed && app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if key.code == KeyCode::Esc && app.notice.is_some() {
        app.notice = None;
        return Ok(());
    }

    app.screen.process_event(event, &app.event_tx)?;

    match focus {
        Focus::None => process_global_key_event(app, key),
        Focus::Input => Ok(()),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let goto = |route: Route| AppEvent::Navigate(route, NavParams::default());

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.event_tx.send(goto(Route::Home))?,
        KeyCode::Char('2') => app.event_tx.send(goto(Route::Scanner))?,
        KeyCode::Char('3') => app.event_tx.send(goto(Route::Tours))?,
        KeyCode::Char('4') => app.event_tx.send(goto(Route::Favourites))?,
        KeyCode::Char('5') => app.event_tx.send(goto(Route::Ar))?,
        KeyCode::Char('6') => app.event_tx.send(goto(Route::Portfolio))?,

        KeyCode::Esc | KeyCode::Backspace => app.event_tx.send(AppEvent::Back)?,

        _ => {}
    }

    Ok(())
}
