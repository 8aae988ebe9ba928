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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::info;

use crate::{
    components::TourView,
    events::{AppEvent, AppEventProcessor},
    model::{notice::Notice, tour::TourState},
    router::{NavParams, Route},
    util::format::format_time,
};

impl AppEventProcessor for TourView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        if self.tour.is_none() {
            return Ok(());
        }

        let before = self.run.state();

        match key_event.code {
            KeyCode::Char('s') => self.run.start(),
            KeyCode::Enter if before == TourState::NotStarted => self.run.start(),
            KeyCode::Char(' ') => self.run.toggle_pause(),
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Char('l') => self.run.advance(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::Char('h') => self.run.retreat(),
            KeyCode::Char('r') => self.run.reset(),

            // The current stop's artwork, its scanner and its AR view.
            KeyCode::Char('v') | KeyCode::Char('c') | KeyCode::Char('a') => {
                if let Some(artwork) = self.current_artwork() {
                    let (route, params) = match key_event.code {
                        KeyCode::Char('c') => (Route::Scanner, NavParams::scan(artwork.qr_code.clone())),
                        KeyCode::Char('a') => (Route::Ar, NavParams::artwork(artwork.id.clone())),
                        _ => (Route::Artwork(artwork.id.clone()), NavParams::default()),
                    };
                    event_tx.send(AppEvent::Navigate(route, params))?;
                }
                return Ok(());
            }

            _ => return Ok(()),
        }

        self.sync_clock(event_tx);

        let after = self.run.state();
        if before != after {
            info!(tour = %self.requested_id, from = ?before, to = ?after, "Tour state changed");
        }
        if after == TourState::Completed && before != TourState::Completed {
            event_tx.send(AppEvent::Notify(Notice::info(
                "Tour Complete!",
                format!(
                    "You visited {} stops in {}",
                    self.run.stop_count(),
                    format_time(self.run.elapsed())
                ),
            )))?;
        }

        Ok(())
    }
}
