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
    components::{ArtworkView, artwork::share_text},
    events::{AppEvent, AppEventProcessor},
    model::notice::Notice,
    router::{NavParams, Route},
};

impl AppEventProcessor for ArtworkView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.set_tab(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.set_tab(self.tab.previous())
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }

        let Some(artwork) = &self.artwork else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Char('f') => event_tx.send(AppEvent::ToggleFavourite(artwork.id.clone()))?,
            KeyCode::Char('s') => event_tx.send(AppEvent::Navigate(
                Route::Scanner,
                NavParams::scan(artwork.qr_code.clone()),
            ))?,
            KeyCode::Char('a') => event_tx.send(AppEvent::Navigate(
                Route::Ar,
                NavParams::artwork(artwork.id.clone()),
            ))?,
            KeyCode::Char('y') => {
                let text = share_text(artwork);
                info!(artwork = %artwork.id, %text, "Shared artwork");
                event_tx.send(AppEvent::Notify(Notice::info("Shared", text)))?;
            }
            _ => {}
        }

        Ok(())
    }
}
