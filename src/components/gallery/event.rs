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
    components::{GalleryView, SelectorAction},
    events::{AppEvent, AppEventProcessor},
    router::{NavParams, Route},
};

impl AppEventProcessor for GalleryView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(SelectorAction::Activate(_)) = self.selector.process_event(&event) {
            if let Some(artwork) = self.selected_artwork() {
                let route = Route::Artwork(artwork.id.clone());
                event_tx.send(AppEvent::Navigate(route, NavParams::default()))?;
            }
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };
        let Some(artwork) = self.selected_artwork() else {
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
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, mpsc};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{data::Museum, model::Category};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn scan_key_hands_the_code_to_the_scanner() {
        let museum = Arc::new(Museum::load().unwrap());
        let mut view = GalleryView::new(museum, Category::Paintings, &[]);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('s')), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::Navigate(Route::Scanner, params) => {
                assert_eq!(params.target_qr.as_deref(), Some("QR001"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn enter_opens_selected_artwork() {
        let museum = Arc::new(Museum::load().unwrap());
        let mut view = GalleryView::new(museum, Category::Paintings, &[]);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Down), &tx).unwrap();
        view.process_event(key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Navigate(Route::Artwork(id), _)) if id == "starry-night"
        ));
    }
}
