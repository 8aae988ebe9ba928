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

//! Guided tour progression.
//!
//! A [`TourRun`] tracks a visitor's walk through the ordered stops of a tour:
//! which stop they are at, which stops they have finished, how long the tour
//! has been running and whether it is currently running at all.
//!
//! ```text
//!  NotStarted --start--> Active <--toggle_pause--> Paused
//!                          |  advance (last stop)     |
//!                          +--------> Completed <-----+
//! ```
//!
//! `reset` returns to `NotStarted` from anywhere.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TourState {
    NotStarted,
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone)]
pub(crate) struct TourRun {
    stop_count: usize,
    current: usize,
    completed: BTreeSet<usize>,
    elapsed: u64,
    state: TourState,
}

impl TourRun {
    pub(crate) fn new(stop_count: usize) -> Self {
        Self {
            stop_count,
            current: 0,
            completed: BTreeSet::new(),
            elapsed: 0,
            state: TourState::NotStarted,
        }
    }

    pub(crate) fn state(&self) -> TourState {
        self.state
    }

    pub(crate) fn current_stop(&self) -> usize {
        self.current
    }

    pub(crate) fn stop_count(&self) -> usize {
        self.stop_count
    }

    pub(crate) fn is_stop_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub(crate) fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Seconds spent with the tour running.
    pub(crate) fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Whether the elapsed time counter should be running.
    pub(crate) fn is_running(&self) -> bool {
        self.state == TourState::Active
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.stop_count > 0 && self.completed.len() == self.stop_count
    }

    /// (Re)starts the tour from the first stop with a fresh clock.
    pub(crate) fn start(&mut self) {
        if self.stop_count == 0 {
            return;
        }
        self.current = 0;
        self.completed.clear();
        self.elapsed = 0;
        self.state = TourState::Active;
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.state = match self.state {
            TourState::Active => TourState::Paused,
            TourState::Paused => TourState::Active,
            other => other,
        };
    }

    /// Marks the current stop as done and moves on, completing the tour when
    /// leaving the last stop. Advancing a paused tour resumes it.
    pub(crate) fn advance(&mut self) {
        if !matches!(self.state, TourState::Active | TourState::Paused) {
            return;
        }

        self.completed.insert(self.current);

        if self.current + 1 < self.stop_count {
            self.current += 1;
            self.state = TourState::Active;
        } else {
            self.state = TourState::Completed;
        }
    }

    /// Steps back one stop. The stop returned to counts as not yet visited.
    pub(crate) fn retreat(&mut self) {
        if !matches!(self.state, TourState::Active | TourState::Paused) || self.current == 0 {
            return;
        }

        self.current -= 1;
        self.completed.remove(&self.current);
    }

    pub(crate) fn reset(&mut self) {
        self.current = 0;
        self.completed.clear();
        self.elapsed = 0;
        self.state = TourState::NotStarted;
    }

    /// Advances the elapsed time counter by one second if the tour is running.
    pub(crate) fn tick(&mut self) {
        if self.is_running() {
            self.elapsed += 1;
        }
    }

    /// Fraction of the tour done, in `0.0..=1.0`.
    ///
    /// While running, the stop being visited counts as half done.
    pub(crate) fn progress(&self) -> f64 {
        if self.stop_count == 0 {
            return 0.0;
        }

        let in_progress = if self.is_running() { 0.5 } else { 0.0 };
        (self.completed.len() as f64 + in_progress) / self.stop_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(stops: usize) -> TourRun {
        let mut run = TourRun::new(stops);
        run.start();
        run
    }

    #[test]
    fn new_run_has_no_progress() {
        let run = TourRun::new(4);
        assert_eq!(run.state(), TourState::NotStarted);
        assert_eq!(run.progress(), 0.0);
        assert!(!run.is_complete());
    }

    #[test]
    fn start_resets_everything() {
        let mut run = started(4);
        run.advance();
        run.tick();
        run.start();

        assert_eq!(run.state(), TourState::Active);
        assert_eq!(run.current_stop(), 0);
        assert_eq!(run.completed_count(), 0);
        assert_eq!(run.elapsed(), 0);
    }

    #[test]
    fn four_advances_complete_a_four_stop_tour() {
        let mut run = started(4);
        for _ in 0..3 {
            run.advance();
            assert_eq!(run.state(), TourState::Active);
        }
        run.advance();

        assert_eq!(run.state(), TourState::Completed);
        assert_eq!(run.completed_count(), 4);
        assert!(run.is_complete());
        assert_eq!(run.progress(), 1.0);
        assert_eq!(run.current_stop(), 3);
    }

    #[test]
    fn advancing_after_completion_does_nothing() {
        let mut run = started(1);
        run.advance();
        run.advance();
        assert_eq!(run.completed_count(), 1);
        assert_eq!(run.state(), TourState::Completed);
    }

    #[test]
    fn retreat_forgets_the_stop_returned_to() {
        let mut run = started(4);
        run.advance();
        run.advance();
        assert_eq!(run.current_stop(), 2);

        run.retreat();
        assert_eq!(run.current_stop(), 1);
        assert!(run.is_stop_completed(0));
        assert!(!run.is_stop_completed(1));
        assert_eq!(run.completed_count(), 1);
    }

    #[test]
    fn retreat_at_first_stop_is_a_no_op() {
        let mut run = started(4);
        run.retreat();
        assert_eq!(run.current_stop(), 0);
        assert_eq!(run.state(), TourState::Active);
    }

    #[test]
    fn pause_stops_the_clock() {
        let mut run = started(2);
        run.tick();
        run.toggle_pause();
        assert_eq!(run.state(), TourState::Paused);
        run.tick();
        assert_eq!(run.elapsed(), 1);

        run.toggle_pause();
        run.tick();
        assert_eq!(run.elapsed(), 2);
    }

    #[test]
    fn advancing_while_paused_resumes() {
        let mut run = started(3);
        run.toggle_pause();
        run.advance();
        assert_eq!(run.state(), TourState::Active);
        assert_eq!(run.current_stop(), 1);
    }

    #[test]
    fn progress_counts_the_current_stop_as_half_done() {
        let mut run = started(4);
        assert_eq!(run.progress(), 0.125);

        run.advance();
        assert_eq!(run.progress(), 0.375);

        run.toggle_pause();
        assert_eq!(run.progress(), 0.25);
    }

    #[test]
    fn reset_returns_to_not_started() {
        let mut run = started(4);
        run.advance();
        run.tick();
        run.reset();

        assert_eq!(run.state(), TourState::NotStarted);
        assert_eq!(run.current_stop(), 0);
        assert_eq!(run.completed_count(), 0);
        assert_eq!(run.elapsed(), 0);
        assert_eq!(run.progress(), 0.0);
    }

    #[test]
    fn ticks_are_ignored_unless_running() {
        let mut run = TourRun::new(2);
        run.tick();
        assert_eq!(run.elapsed(), 0);

        run.start();
        run.advance();
        run.advance();
        run.tick();
        assert_eq!(run.elapsed(), 0);
    }
}
