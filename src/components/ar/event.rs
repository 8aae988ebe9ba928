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
    components::ArView,
    devices::{ArMode, ArSession},
    events::{AppEvent, AppEventProcessor},
    model::notice::Notice,
};

fn mode_changed(session: &ArSession) -> Notice {
    Notice::info(
        "AR Mode Changed",
        format!("Switched to {} mode", session.mode.label()),
    )
}

impl AppEventProcessor for ArView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        if key_event.code == KeyCode::Enter {
            event_tx.send(AppEvent::RequestAr)?;
            return Ok(());
        }
        if key_event.code == KeyCode::Char('x') {
            self.stop();
            return Ok(());
        }

        let Some(session) = self.session_mut() else {
            return Ok(());
        };

        let notice = match key_event.code {
            KeyCode::Char('m') => {
                session.cycle_mode();
                mode_changed(session)
            }
            KeyCode::Char('d') | KeyCode::Char('i') | KeyCode::Char('n') => {
                let mode = match key_event.code {
                    KeyCode::Char('d') => ArMode::Model,
                    KeyCode::Char('i') => ArMode::Info,
                    _ => ArMode::Animation,
                };
                session.set_mode(mode);
                mode_changed(session)
            }
            KeyCode::Char('o') => {
                session.toggle_audio();
                if session.audio {
                    Notice::info("Audio Enabled", "AR sounds activated")
                } else {
                    Notice::info("Audio Disabled", "AR sounds muted")
                }
            }
            KeyCode::Char('p') => {
                session.toggle_animation();
                if session.animating {
                    Notice::info("Animation Playing", "3D animation started")
                } else {
                    Notice::info("Animation Paused", "3D animation stopped")
                }
            }
            _ => return Ok(()),
        };

        event_tx.send(AppEvent::Notify(notice))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::data::Museum;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn controls_need_a_running_camera() {
        let museum = Museum::load().unwrap();
        let mut view = ArView::new(&museum, None);
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('m')), &tx).unwrap();
        assert!(rx.try_recv().is_err());

        view.process_event(key(KeyCode::Enter), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::RequestAr)));
    }

    #[test]
    fn mode_and_toggles_are_announced() {
        let museum = Museum::load().unwrap();
        let mut view = ArView::new(&museum, None);
        view.begin_initialise();
        view.camera_ready(Ok(ArSession::default()));
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('m')), &tx).unwrap();
        assert_eq!(view.session_mut().unwrap().mode, ArMode::Info);
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Notify(n)) if n.title == "AR Mode Changed"));

        view.process_event(key(KeyCode::Char('o')), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Notify(n)) if n.title == "Audio Disabled"));

        view.process_event(key(KeyCode::Char('p')), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Notify(n)) if n.title == "Animation Playing"));
    }

    #[test]
    fn modes_can_be_picked_directly() {
        let museum = Museum::load().unwrap();
        let mut view = ArView::new(&museum, None);
        view.begin_initialise();
        view.camera_ready(Ok(ArSession::default()));
        let (tx, rx) = mpsc::channel();

        view.process_event(key(KeyCode::Char('n')), &tx).unwrap();
        assert_eq!(view.session_mut().unwrap().mode, ArMode::Animation);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Notify(n)) if n.description == "Switched to Animation mode"
        ));

        view.process_event(key(KeyCode::Char('i')), &tx).unwrap();
        assert_eq!(view.session_mut().unwrap().mode, ArMode::Info);

        view.process_event(key(KeyCode::Char('d')), &tx).unwrap();
        assert_eq!(view.session_mut().unwrap().mode, ArMode::Model);
    }
}
