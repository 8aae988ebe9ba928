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

use crate::{
    data::Museum,
    devices::ArSession,
    error::GuideResult,
    model::Artwork,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArState {
    Idle,
    Initialising,
    Active(ArSession),
    Failed(String),
}

pub(crate) struct ArView {
    artwork: Option<Artwork>,
    state: ArState,
    frame: usize,
}

impl ArView {
    pub(crate) fn new(museum: &Museum, artwork_id: Option<&str>) -> Self {
        Self {
            artwork: artwork_id.and_then(|id| museum.artwork(id)).cloned(),
            state: ArState::Idle,
            frame: 0,
        }
    }

    /// Marks the camera as starting, returning `false` if it is already
    /// starting or running.
    pub(crate) fn begin_initialise(&mut self) -> bool {
        match self.state {
            ArState::Idle | ArState::Failed(_) => {
                self.state = ArState::Initialising;
                true
            }
            ArState::Initialising | ArState::Active(_) => false,
        }
    }

    pub(crate) fn camera_ready(&mut self, result: GuideResult<ArSession>) {
        self.state = match result {
            Ok(session) => ArState::Active(session),
            Err(e) => ArState::Failed(e.to_string()),
        };
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut ArSession> {
        match &mut self.state {
            ArState::Active(session) => Some(session),
            _ => None,
        }
    }

    fn stop(&mut self) {
        if matches!(self.state, ArState::Active(_)) {
            self.state = ArState::Idle;
        }
    }

    pub(crate) fn tick(&mut self) {
        let animating = match &self.state {
            ArState::Initialising => true,
            ArState::Active(session) => session.animating,
            _ => false,
        };
        if animating {
            self.frame = self.frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuideError;

    #[test]
    fn initialise_only_from_idle_or_failed() {
        let museum = Museum::load().unwrap();
        let mut view = ArView::new(&museum, Some("mona-lisa"));
        assert_eq!(view.artwork.as_ref().unwrap().title, "Mona Lisa");

        assert!(view.begin_initialise());
        assert!(!view.begin_initialise());

        view.camera_ready(Err(GuideError::PermissionDenied));
        assert!(matches!(view.state, ArState::Failed(_)));
        assert!(view.session_mut().is_none());

        assert!(view.begin_initialise());
        view.camera_ready(Ok(ArSession::default()));
        assert!(view.session_mut().is_some());
        assert!(!view.begin_initialise());

        view.stop();
        assert_eq!(view.state, ArState::Idle);
    }

    #[test]
    fn unknown_artwork_is_ignored() {
        let museum = Museum::load().unwrap();
        let view = ArView::new(&museum, Some("missing"));
        assert!(view.artwork.is_none());
    }
}
