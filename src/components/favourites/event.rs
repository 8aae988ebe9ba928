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
    components::{FavouritesView, SelectorAction},
    events::{AppEvent, AppEventProcessor},
    model::notice::Notice,
    router::{NavParams, Route},
};

impl AppEventProcessor for FavouritesView {
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

        match key_event.code {
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(artwork) = self.selected_artwork() {
                    event_tx.send(AppEvent::RemoveFavourite(artwork.id.clone()))?;
                }
            }
            KeyCode::Char('C') if !self.artwork_ids.is_empty() => {
                event_tx.send(AppEvent::ClearFavourites)?;
            }
            KeyCode::Char('t') => {
                if self.artwork_ids.is_empty() {
                    event_tx.send(AppEvent::Notify(Notice::info(
                        "No Favourites Yet",
                        "Add artworks to your favourites to build a custom tour",
                    )))?;
                } else {
                    info!(stops = self.artwork_ids.len(), "Building custom tour");
                    event_tx.send(AppEvent::Navigate(
                        Route::Tours,
                        NavParams::custom_tour(self.artwork_ids.clone()),
                    ))?;
                }
            }
            KeyCode::Char('y') if !self.artwork_ids.is_empty() => {
                event_tx.send(AppEvent::Notify(Notice::info("Shared", self.share_text())))?;
            }
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
    use crate::data::Museum;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view(favourites: &[&str]) -> FavouritesView {
        let museum = Arc::new(Museum::load().unwrap());
        let ids: Vec<String> = favourites.iter().map(|s| s.to_string()).collect();
        FavouritesView::new(museum, &ids)
    }

    #[test]
    fn remove_targets_selected_artwork() {
        let mut view = view(&["david", "mona-lisa"]);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('j')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('d')), &tx).unwrap();

        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::RemoveFavourite(id)) if id == "mona-lisa"
        ));
    }

    #[test]
    fn custom_tour_needs_favourites() {
        let mut view = view(&[]);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('t')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('C')), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Notify(_))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn share_sends_titles() {
        let mut view = view(&["rosetta-stone"]);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('y')), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::Notify(notice) => assert!(notice.description.ends_with("Rosetta Stone")),
            other => panic!("unexpected event {:?}", other),
        }
    }
}
