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

//! Keyboard driven cursor over a list of items.
//!
//! Screens keep the items themselves; the selector only tracks which one is
//! current and hands the index back when the visitor activates it.

mod event;

use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorAction {
    Activate(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Selector {
    len: usize,
    state: ListState,
}

impl Selector {
    pub(crate) fn new(len: usize) -> Self {
        let mut selector = Self::default();
        selector.set_len(len);
        selector
    }

    /// Changes the number of items, keeping the cursor in range.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (self.state.selected(), len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.state.select(selected);
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub(crate) fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    fn goto_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if self.len > 0 {
            self.state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.state.select(Some(self.len - 1));
        }
    }
}
