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

use crate::{
    components::{ScannerView, SelectorAction, scanner::DEMO_CODES},
    events::{AppEvent, AppEventProcessor},
    router::{NavParams, Route},
};

impl AppEventProcessor for ScannerView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(SelectorAction::Activate(index)) = self.selector.process_event(&event) {
            if let Some((kind, code)) = DEMO_CODES.get(index) {
                event_tx.send(AppEvent::RequestScan(*kind, code.to_string()))?;
            }
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Char('m') if !self.is_scanning() => self.mode = self.mode.toggle(),
            KeyCode::Char('c') => self.clear(),

            KeyCode::Char('v') => {
                if let Some(artwork) = self.result() {
                    let route = Route::Artwork(artwork.id.clone());
                    event_tx.send(AppEvent::Navigate(route, NavParams::default()))?;
                }
            }
            KeyCode::Char('a') => {
                if let Some(artwork) = self.result() {
                    let params = NavParams::artwork(artwork.id.clone());
                    event_tx.send(AppEvent::Navigate(Route::Ar, params))?;
                }
            }

            _ => {}
        }

        Ok(())
    }
}
