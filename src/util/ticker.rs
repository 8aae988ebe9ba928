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

//! A cancellable periodic timer thread.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

/// Sends an event down a channel at a fixed interval until cancelled or
/// dropped. The thread also stops once the receiving end goes away.
///
/// Cancellation is checked on every wake up, so the thread may outlive the
/// ticker by at most one interval but never sends after it is cancelled.
#[derive(Debug)]
pub(crate) struct Ticker {
    cancelled: Arc<AtomicBool>,
}

impl Ticker {
    pub(crate) fn spawn<E, F>(interval: Duration, tx: Sender<E>, make_event: F) -> Self
    where
        E: Send + 'static,
        F: Fn() -> E + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(make_event()).is_err() {
                    break;
                }
            }
        });

        Self { cancelled }
    }

    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn ticks_until_dropped() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx, || 7u8);

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(7));
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(7));

        drop(ticker);
        // Drain anything sent before the flag was seen, then expect silence.
        while rx.recv_timeout(Duration::from_millis(50)).is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn cancelled_ticker_falls_silent() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx, || 1u8);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(1));

        ticker.cancel();
        while rx.recv_timeout(Duration::from_millis(50)).is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        // Still held, so only the flag stopped it.
        drop(ticker);
    }
}
