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

use crossterm::event::{Event, KeyCode};

use crate::components::{Selector, SelectorAction};

impl Selector {
    /// Moves the cursor for navigation keys, returning an action when the
    /// current item is activated.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SelectorAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => return self.selected().map(SelectorAction::Activate),

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut selector = Selector::new(3);
        assert_eq!(selector.selected(), Some(0));

        selector.process_event(&key(KeyCode::Up));
        assert_eq!(selector.selected(), Some(2));

        selector.process_event(&key(KeyCode::Char('j')));
        assert_eq!(selector.selected(), Some(0));

        selector.process_event(&key(KeyCode::Char('G')));
        assert_eq!(selector.selected(), Some(2));
        selector.process_event(&key(KeyCode::Char('g')));
        assert_eq!(selector.selected(), Some(0));
    }

    #[test]
    fn enter_activates_current_item() {
        let mut selector = Selector::new(2);
        selector.process_event(&key(KeyCode::Down));
        assert_eq!(
            selector.process_event(&key(KeyCode::Enter)),
            Some(SelectorAction::Activate(1))
        );
    }

    #[test]
    fn empty_selector_does_nothing() {
        let mut selector = Selector::new(0);
        assert_eq!(selector.process_event(&key(KeyCode::Down)), None);
        assert_eq!(selector.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn shrinking_keeps_cursor_in_range() {
        let mut selector = Selector::new(5);
        selector.process_event(&key(KeyCode::End));
        selector.set_len(2);
        assert_eq!(selector.selected(), Some(1));
        selector.set_len(0);
        assert_eq!(selector.selected(), None);
        selector.set_len(4);
        assert_eq!(selector.selected(), Some(0));
    }
}
