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

use std::sync::{Arc, mpsc::Sender};

use anyhow::Result;

use crate::{
    components::Selector,
    data::Museum,
    events::AppEvent,
    model::{Artwork, ScanKind},
    router::NavParams,
};

/// Codes offered for scanning without a physical label to hand.
pub(crate) const DEMO_CODES: [(ScanKind, &str); 4] = [
    (ScanKind::Qr, "QR001"),
    (ScanKind::Qr, "QR002"),
    (ScanKind::Qr, "QR003"),
    (ScanKind::Nfc, "NFC004"),
];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanStatus {
    Ready,
    Scanning { kind: ScanKind, code: String },
    Found(Box<Artwork>),
    NotFound { kind: ScanKind, code: String },
}

pub(crate) struct ScannerView {
    museum: Arc<Museum>,
    mode: ScanKind,
    status: ScanStatus,
    selector: Selector,
    frame: usize,
}

impl ScannerView {
    pub(crate) fn new(museum: Arc<Museum>) -> Self {
        Self {
            museum,
            mode: ScanKind::Qr,
            status: ScanStatus::Ready,
            selector: Selector::new(DEMO_CODES.len()),
            frame: 0,
        }
    }

    /// Starts reading a code handed over by the previous screen.
    pub(crate) fn on_mount(&self, params: &NavParams, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(code) = &params.target_qr {
            event_tx.send(AppEvent::RequestScan(ScanKind::Qr, code.clone()))?;
        }
        Ok(())
    }

    /// Marks a scan as under way, returning `false` if one already is.
    pub(crate) fn begin_scan(&mut self, kind: ScanKind, code: &str) -> bool {
        if self.is_scanning() {
            return false;
        }

        self.mode = kind;
        self.status = ScanStatus::Scanning {
            kind,
            code: code.to_string(),
        };
        true
    }

    pub(crate) fn scan_finished(&mut self, kind: ScanKind, code: String, artwork: Option<Artwork>) {
        self.status = match artwork {
            Some(artwork) => ScanStatus::Found(Box::new(artwork)),
            None => ScanStatus::NotFound { kind, code },
        };
    }

    pub(crate) fn is_scanning(&self) -> bool {
        matches!(self.status, ScanStatus::Scanning { .. })
    }

    pub(crate) fn result(&self) -> Option<&Artwork> {
        match &self.status {
            ScanStatus::Found(artwork) => Some(&**artwork),
            _ => None,
        }
    }

    pub(crate) fn tick(&mut self) {
        if self.is_scanning() {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    fn clear(&mut self) {
        if !self.is_scanning() {
            self.status = ScanStatus::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ScannerView {
        ScannerView::new(Arc::new(Museum::load().unwrap()))
    }

    #[test]
    fn one_scan_at_a_time() {
        let mut view = view();
        assert!(view.begin_scan(ScanKind::Nfc, "NFC004"));
        assert_eq!(view.mode, ScanKind::Nfc);
        assert!(!view.begin_scan(ScanKind::Qr, "QR001"));

        view.scan_finished(ScanKind::Nfc, "NFC004".to_string(), None);
        assert!(!view.is_scanning());
        assert!(view.begin_scan(ScanKind::Qr, "QR001"));
    }

    #[test]
    fn result_is_kept_until_cleared() {
        let mut view = view();
        let artwork = view.museum.artwork("david").cloned();

        view.begin_scan(ScanKind::Qr, "QR004");
        view.scan_finished(ScanKind::Qr, "QR004".to_string(), artwork);
        assert_eq!(view.result().unwrap().id, "david");

        view.clear();
        assert!(view.result().is_none());
        assert_eq!(view.status, ScanStatus::Ready);
    }

    #[test]
    fn mount_with_target_requests_a_qr_scan() {
        let view = view();
        let (tx, rx) = std::sync::mpsc::channel();

        view.on_mount(&NavParams::scan("QR003"), &tx).unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::RequestScan(ScanKind::Qr, code)) if code == "QR003"
        ));

        view.on_mount(&NavParams::default(), &tx).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn demo_codes_all_resolve() {
        let museum = Museum::load().unwrap();
        for (kind, code) in DEMO_CODES {
            assert!(museum.find_by_code(kind, code).is_some(), "{}", code);
        }
    }
}
