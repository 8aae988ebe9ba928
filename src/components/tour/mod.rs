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

use std::{
    sync::{Arc, mpsc::Sender},
    time::Duration,
};

use tracing::debug;

use crate::{
    data::{CUSTOM_TOUR_ID, Museum},
    error::GuideError,
    events::AppEvent,
    model::{
        Artwork, Tour,
        tour::TourRun,
    },
    util::ticker::Ticker,
};

const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) struct TourView {
    museum: Arc<Museum>,
    requested_id: String,
    tour: Option<Tour>,
    run: TourRun,
    clock: Option<Ticker>,
    generation: u64,
}

impl TourView {
    /// Mounts a museum tour, or the custom tour when `tour_id` is the custom
    /// tour id and artworks were handed over for it.
    pub(crate) fn new(
        museum: &Arc<Museum>,
        tour_id: &str,
        custom_artworks: Option<&[String]>,
        generation: u64,
    ) -> Self {
        let tour = if tour_id == CUSTOM_TOUR_ID {
            custom_artworks.and_then(|ids| museum.custom_tour(ids))
        } else {
            museum.tour(tour_id).cloned()
        };
        let stop_count = tour.as_ref().map_or(0, |t| t.stops.len());

        Self {
            museum: museum.clone(),
            requested_id: tour_id.to_string(),
            tour,
            run: TourRun::new(stop_count),
            clock: None,
            generation,
        }
    }

    pub(crate) fn title(&self) -> String {
        match &self.tour {
            Some(tour) => tour.name.clone(),
            None => "Tour not found".to_string(),
        }
    }

    /// The error to report when the requested tour could not be found.
    pub(crate) fn missing_tour(&self) -> Option<GuideError> {
        self.tour
            .is_none()
            .then(|| GuideError::UnknownTour(self.requested_id.clone()))
    }

    pub(crate) fn run(&self) -> &TourRun {
        &self.run
    }

    pub(crate) fn current_artwork(&self) -> Option<&Artwork> {
        let stop = self.tour.as_ref()?.stops.get(self.run.current_stop())?;
        self.museum.artwork(&stop.artwork)
    }

    /// Counts one second of touring.
    pub(crate) fn tick(&mut self) {
        self.run.tick();
        if !self.run.is_running() {
            self.clock = None;
        }
    }

    /// Starts or stops the clock to match the tour state.
    ///
    /// The clock only runs while the tour is active; dropping the ticker
    /// cancels it.
    fn sync_clock(&mut self, event_tx: &Sender<AppEvent>) {
        match (self.run.is_running(), self.clock.is_some()) {
            (true, false) => {
                debug!(tour = %self.requested_id, "Tour clock started");
                let generation = self.generation;
                self.clock = Some(Ticker::spawn(CLOCK_INTERVAL, event_tx.clone(), move || {
                    AppEvent::TourTick(generation)
                }));
            }
            (false, true) => {
                debug!(tour = %self.requested_id, "Tour clock stopped");
                self.clock = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::model::tour::TourState;

    fn view() -> TourView {
        let museum = Arc::new(Museum::load().unwrap());
        TourView::new(&museum, "highlights-tour", None, 0)
    }

    #[test]
    fn clock_runs_only_while_active() {
        let mut view = view();
        let (tx, _rx) = mpsc::channel();

        view.run.start();
        view.sync_clock(&tx);
        assert!(view.clock.is_some());

        view.run.toggle_pause();
        view.sync_clock(&tx);
        assert!(view.clock.is_none());

        view.run.toggle_pause();
        view.sync_clock(&tx);
        assert!(view.clock.is_some());

        view.run.reset();
        view.sync_clock(&tx);
        assert!(view.clock.is_none());
    }

    #[test]
    fn tick_after_completion_drops_the_clock() {
        let mut view = view();
        let (tx, _rx) = mpsc::channel();

        view.run.start();
        view.sync_clock(&tx);
        for _ in 0..view.run.stop_count() {
            view.run.advance();
        }
        assert_eq!(view.run.state(), TourState::Completed);

        view.tick();
        assert!(view.clock.is_none());
        assert_eq!(view.run.elapsed(), 0);
    }

    #[test]
    fn current_artwork_follows_the_stop() {
        let mut view = view();
        assert_eq!(view.current_artwork().unwrap().id, "mona-lisa");

        view.run.start();
        view.run.advance();
        assert_eq!(view.current_artwork().unwrap().id, "starry-night");
    }

    #[test]
    fn custom_tour_needs_artworks() {
        let museum = Arc::new(Museum::load().unwrap());

        let missing = TourView::new(&museum, CUSTOM_TOUR_ID, None, 0);
        assert!(missing.tour.is_none());
        assert_eq!(missing.title(), "Tour not found");
        assert!(matches!(
            missing.missing_tour(),
            Some(GuideError::UnknownTour(id)) if id == CUSTOM_TOUR_ID
        ));

        let ids = vec!["david".to_string()];
        let custom = TourView::new(&museum, CUSTOM_TOUR_ID, Some(ids.as_slice()), 0);
        assert_eq!(custom.run().stop_count(), 1);
        assert!(custom.missing_tour().is_none());
    }

    #[test]
    fn unknown_tour_cannot_start() {
        let museum = Arc::new(Museum::load().unwrap());
        let mut view = TourView::new(&museum, "nope", None, 0);
        view.run.start();
        assert_eq!(view.run.state(), TourState::NotStarted);
    }
}
