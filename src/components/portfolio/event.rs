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
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{PortfolioView, portfolio::PortfolioTab},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PortfolioView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        if self.editing {
            self.process_form_event(&event, key_event, event_tx)
        } else {
            self.process_browse_event(key_event);
            Ok(())
        }
    }
}

impl PortfolioView {
    fn process_browse_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.select_tab(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select_tab(self.tab.previous())
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('e') => self.begin_editing(),
            KeyCode::Enter if self.tab == PortfolioTab::Contact => self.begin_editing(),
            _ => {}
        }
    }

    fn process_form_event(
        &mut self,
        event: &Event,
        key_event: KeyEvent,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        match key_event.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.previous(),
            KeyCode::Enter => event_tx.send(AppEvent::SubmitContact(self.form()))?,
            _ => {
                let field = self.field;
                self.input_mut(field).handle_event(event);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, mpsc};

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        data::load_portfolio,
        model::contact::ContactField,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut PortfolioView, tx: &Sender<AppEvent>, text: &str) {
        for c in text.chars() {
            view.process_event(key(KeyCode::Char(c)), tx).unwrap();
        }
    }

    #[test]
    fn browse_keys_move_between_tabs() {
        let mut view = PortfolioView::new(Arc::new(load_portfolio().unwrap()));
        let (tx, _rx) = mpsc::channel();

        view.process_event(key(KeyCode::Tab), &tx).unwrap();
        assert_eq!(view.tab, PortfolioTab::Skills);
        view.process_event(key(KeyCode::Char('j')), &tx).unwrap();
        assert_eq!(view.scroll, 1);
        view.process_event(key(KeyCode::BackTab), &tx).unwrap();
        assert_eq!(view.tab, PortfolioTab::About);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut view = PortfolioView::new(Arc::new(load_portfolio().unwrap()));
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('e')), &tx).unwrap();
        assert!(view.is_editing());
        assert_eq!(view.tab, PortfolioTab::Contact);

        type_text(&mut view, &tx, "Ada");
        view.process_event(key(KeyCode::Tab), &tx).unwrap();
        type_text(&mut view, &tx, "ada@example.com");
        view.process_event(key(KeyCode::Up), &tx).unwrap();
        assert_eq!(view.field, ContactField::Name);

        view.process_event(key(KeyCode::Enter), &tx).unwrap();
        match rx.try_recv().unwrap() {
            AppEvent::SubmitContact(form) => {
                assert_eq!(form.name, "Ada");
                assert_eq!(form.email, "ada@example.com");
                assert!(form.subject.is_empty());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn esc_stops_editing_without_losing_text() {
        let mut view = PortfolioView::new(Arc::new(load_portfolio().unwrap()));
        let (tx, _rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('e')), &tx).unwrap();
        type_text(&mut view, &tx, "q1");
        view.process_event(key(KeyCode::Esc), &tx).unwrap();

        assert!(!view.is_editing());
        assert_eq!(view.form().name, "q1");
    }
}
