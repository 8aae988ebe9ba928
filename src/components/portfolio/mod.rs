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

mod event;
mod render;

use std::{fmt, sync::Arc};

use tui_input::Input;

use crate::model::{
    contact::{ContactField, ContactForm},
    portfolio::Portfolio,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortfolioTab {
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl PortfolioTab {
    pub(crate) const ALL: [PortfolioTab; 5] = [
        PortfolioTab::About,
        PortfolioTab::Skills,
        PortfolioTab::Projects,
        PortfolioTab::Experience,
        PortfolioTab::Contact,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PortfolioTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortfolioTab::About => "About",
            PortfolioTab::Skills => "Skills",
            PortfolioTab::Projects => "Projects",
            PortfolioTab::Experience => "Experience",
            PortfolioTab::Contact => "Contact",
        };
        f.write_str(label)
    }
}

/// The contact form's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SendState {
    Idle,
    Sending,
    Sent,
}

pub(crate) struct PortfolioView {
    portfolio: Arc<Portfolio>,
    tab: PortfolioTab,
    scroll: u16,
    editing: bool,
    field: ContactField,
    inputs: [Input; 4],
    send_state: SendState,
}

impl PortfolioView {
    pub(crate) fn new(portfolio: Arc<Portfolio>) -> Self {
        Self {
            portfolio,
            tab: PortfolioTab::About,
            scroll: 0,
            editing: false,
            field: ContactField::Name,
            inputs: Default::default(),
            send_state: SendState::Idle,
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    /// Marks the form as in flight, returning `false` if a message is already
    /// being sent.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.send_state == SendState::Sending {
            return false;
        }
        self.send_state = SendState::Sending;
        true
    }

    /// A sent message clears the form; a failed one leaves it for another go.
    pub(crate) fn contact_finished(&mut self, sent: bool) {
        if sent {
            self.inputs.iter_mut().for_each(Input::reset);
            self.field = ContactField::Name;
            self.editing = false;
            self.send_state = SendState::Sent;
        } else {
            self.send_state = SendState::Idle;
        }
    }

    pub(crate) fn form(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set_field(field, self.input(field).value().to_string());
        }
        form
    }

    fn select_tab(&mut self, tab: PortfolioTab) {
        if tab != self.tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    fn begin_editing(&mut self) {
        self.select_tab(PortfolioTab::Contact);
        self.editing = true;
        if self.send_state == SendState::Sent {
            self.send_state = SendState::Idle;
        }
    }

    fn input(&self, field: ContactField) -> &Input {
        &self.inputs[field_index(field)]
    }

    fn input_mut(&mut self, field: ContactField) -> &mut Input {
        &mut self.inputs[field_index(field)]
    }
}

fn field_index(field: ContactField) -> usize {
    match field {
        ContactField::Name => 0,
        ContactField::Email => 1,
        ContactField::Subject => 2,
        ContactField::Message => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_portfolio;

    fn view() -> PortfolioView {
        PortfolioView::new(Arc::new(load_portfolio().unwrap()))
    }

    #[test]
    fn tabs_wrap_both_ways() {
        assert_eq!(PortfolioTab::Contact.next(), PortfolioTab::About);
        assert_eq!(PortfolioTab::About.previous(), PortfolioTab::Contact);
        assert_eq!(PortfolioTab::Skills.next(), PortfolioTab::Projects);
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut view = view();
        assert!(view.begin_submit());
        assert!(!view.begin_submit());

        view.contact_finished(false);
        assert_eq!(view.send_state, SendState::Idle);
        assert!(view.begin_submit());
    }

    #[test]
    fn sent_message_clears_form() {
        let mut view = view();
        view.begin_editing();
        *view.input_mut(ContactField::Name) = Input::new("Ada".to_string());
        *view.input_mut(ContactField::Message) = Input::new("Hello".to_string());
        assert_eq!(view.form().name, "Ada");

        view.begin_submit();
        view.contact_finished(true);

        assert_eq!(view.form(), ContactForm::default());
        assert!(!view.is_editing());
        assert_eq!(view.send_state, SendState::Sent);
    }

    #[test]
    fn switching_tab_resets_scroll() {
        let mut view = view();
        view.scroll = 4;
        view.select_tab(PortfolioTab::About);
        assert_eq!(view.scroll, 4);
        view.select_tab(PortfolioTab::Skills);
        assert_eq!(view.scroll, 0);
    }
}
