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

//! Simulated visitor devices.
//!
//! There is no camera, NFC reader or mail server behind the guide. Each of
//! them is modelled as an operation that takes a while and then answers from
//! the bundled data, so the screens can show the same "working..." states a
//! real device would produce.
//!
//! The delay itself goes through the [`Latency`] port so that tests can run
//! without sleeping.

use std::{sync::Arc, thread, time::Duration};

use tracing::{debug, info, warn};

use crate::{
    data::Museum,
    error::{GuideError, GuideResult},
    model::{Artwork, ScanKind, contact::ContactForm},
};

/// Something that can make the calling thread wait.
pub(crate) trait Latency: Send {
    fn wait(&self, duration: Duration);
}

/// Waits by sleeping the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ThreadLatency;

impl Latency for ThreadLatency {
    fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// How long each simulated device takes to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeviceTimings {
    pub(crate) qr: Duration,
    pub(crate) nfc: Duration,
    pub(crate) ar: Duration,
    pub(crate) contact: Duration,
}

impl DeviceTimings {
    pub(crate) fn scan(&self, kind: ScanKind) -> Duration {
        match kind {
            ScanKind::Qr => self.qr,
            ScanKind::Nfc => self.nfc,
        }
    }
}

/// Resolves scanned QR and NFC codes to artworks.
pub(crate) struct ScanResolver<L: Latency> {
    museum: Arc<Museum>,
    timings: DeviceTimings,
    latency: L,
}

impl<L: Latency> ScanResolver<L> {
    pub(crate) fn new(museum: Arc<Museum>, timings: DeviceTimings, latency: L) -> Self {
        Self {
            museum,
            timings,
            latency,
        }
    }

    /// Looks up the artwork carrying `code`, after the simulated read delay
    /// for the kind of scan.
    ///
    /// A code nobody knows is not an error here; the caller decides how to
    /// tell the visitor.
    pub(crate) fn resolve(&self, kind: ScanKind, code: &str) -> Option<Artwork> {
        self.latency.wait(self.timings.scan(kind));

        let code = code.trim();
        let artwork = self.museum.find_by_code(kind, code).cloned();
        match &artwork {
            Some(a) => debug!(%kind, code, artwork = %a.id, "Scan resolved"),
            None => debug!(%kind, code, "Scan did not match any artwork"),
        }
        artwork
    }
}

/// Viewing modes offered once the AR camera is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArMode {
    Model,
    Info,
    Animation,
}

impl ArMode {
    pub(crate) const ALL: [ArMode; 3] = [ArMode::Model, ArMode::Info, ArMode::Animation];

    pub(crate) fn label(self) -> &'static str {
        match self {
            ArMode::Model => "3D View",
            ArMode::Info => "Info Overlay",
            ArMode::Animation => "Animation",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            ArMode::Model => ArMode::Info,
            ArMode::Info => ArMode::Animation,
            ArMode::Animation => ArMode::Model,
        }
    }
}

/// A running AR session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArSession {
    pub(crate) mode: ArMode,
    pub(crate) audio: bool,
    pub(crate) animating: bool,
}

impl Default for ArSession {
    fn default() -> Self {
        Self {
            mode: ArMode::Model,
            audio: true,
            animating: false,
        }
    }
}

impl ArSession {
    pub(crate) fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub(crate) fn set_mode(&mut self, mode: ArMode) {
        self.mode = mode;
    }

    pub(crate) fn toggle_audio(&mut self) {
        self.audio = !self.audio;
    }

    pub(crate) fn toggle_animation(&mut self) {
        self.animating = !self.animating;
    }
}

/// The simulated AR camera.
pub(crate) struct ArCamera<L: Latency> {
    permission: bool,
    delay: Duration,
    latency: L,
}

impl<L: Latency> ArCamera<L> {
    pub(crate) fn new(permission: bool, timings: DeviceTimings, latency: L) -> Self {
        Self {
            permission,
            delay: timings.ar,
            latency,
        }
    }

    /// Starts the camera.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::PermissionDenied`] if camera access has been
    /// switched off in the configuration.
    pub(crate) fn initialise(&self) -> GuideResult<ArSession> {
        self.latency.wait(self.delay);

        if !self.permission {
            warn!("AR camera initialisation refused, no camera permission");
            return Err(GuideError::PermissionDenied);
        }

        info!("AR camera initialised");
        Ok(ArSession::default())
    }
}

/// Delivers contact form messages.
///
/// Nothing leaves the machine: a valid message is written to the log after the
/// configured delay.
pub(crate) struct ContactDesk<L: Latency> {
    delay: Duration,
    latency: L,
}

impl<L: Latency> ContactDesk<L> {
    pub(crate) fn new(timings: DeviceTimings, latency: L) -> Self {
        Self {
            delay: timings.contact,
            latency,
        }
    }

    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidInput`] if the form is incomplete.
    pub(crate) fn submit(&self, form: &ContactForm) -> GuideResult<()> {
        form.validate()?;
        self.latency.wait(self.delay);

        info!(
            from = %form.email,
            subject = %form.subject,
            length = form.message.len(),
            "Contact message delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records requested waits instead of sleeping.
    #[derive(Default, Clone)]
    pub(crate) struct RecordingLatency {
        pub(crate) waits: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingLatency {
        pub(crate) fn recorded(&self) -> Vec<Duration> {
            self.waits.lock().unwrap().clone()
        }
    }

    impl Latency for RecordingLatency {
        fn wait(&self, duration: Duration) {
            self.waits.lock().unwrap().push(duration);
        }
    }

    pub(crate) fn timings() -> DeviceTimings {
        DeviceTimings {
            qr: Duration::from_millis(800),
            nfc: Duration::from_millis(1000),
            ar: Duration::from_millis(2000),
            contact: Duration::from_millis(1500),
        }
    }

    fn resolver() -> (ScanResolver<RecordingLatency>, RecordingLatency, Arc<Museum>) {
        let museum = Arc::new(Museum::load().unwrap());
        let latency = RecordingLatency::default();
        let resolver = ScanResolver::new(museum.clone(), timings(), latency.clone());
        (resolver, latency, museum)
    }

    #[test]
    fn every_artwork_resolves_by_both_codes() {
        let (resolver, _, museum) = resolver();

        for artwork in museum.artworks() {
            let by_qr = resolver.resolve(ScanKind::Qr, &artwork.qr_code).unwrap();
            assert_eq!(by_qr.id, artwork.id);

            let by_nfc = resolver.resolve(ScanKind::Nfc, &artwork.nfc_code).unwrap();
            assert_eq!(by_nfc.id, artwork.id);
        }
    }

    #[test]
    fn codes_are_not_interchangeable_between_kinds() {
        let (resolver, _, _) = resolver();

        assert!(resolver.resolve(ScanKind::Nfc, "QR001").is_none());
        assert!(resolver.resolve(ScanKind::Qr, "NFC001").is_none());
        assert!(resolver.resolve(ScanKind::Qr, "NOPE").is_none());
    }

    #[test]
    fn waits_the_latency_for_the_kind() {
        let (resolver, latency, _) = resolver();

        resolver.resolve(ScanKind::Qr, "QR002");
        resolver.resolve(ScanKind::Nfc, "missing");

        assert_eq!(
            latency.recorded(),
            vec![Duration::from_millis(800), Duration::from_millis(1000)]
        );
    }

    #[test]
    fn scanned_code_is_trimmed() {
        let (resolver, _, _) = resolver();
        let artwork = resolver.resolve(ScanKind::Qr, "  QR002 ").unwrap();
        assert_eq!(artwork.title, "The Starry Night");
    }

    #[test]
    fn camera_without_permission_is_refused() {
        let latency = RecordingLatency::default();
        let camera = ArCamera::new(false, timings(), latency.clone());

        assert!(matches!(
            camera.initialise(),
            Err(GuideError::PermissionDenied)
        ));
        assert_eq!(latency.recorded(), vec![Duration::from_secs(2)]);
    }

    #[test]
    fn camera_session_controls() {
        let camera = ArCamera::new(true, timings(), RecordingLatency::default());
        let mut session = camera.initialise().unwrap();

        assert_eq!(session.mode, ArMode::Model);
        session.cycle_mode();
        session.cycle_mode();
        assert_eq!(session.mode, ArMode::Animation);
        session.cycle_mode();
        assert_eq!(session.mode, ArMode::Model);

        session.set_mode(ArMode::Info);
        assert_eq!(session.mode, ArMode::Info);

        // Sound is on and the model is still until the visitor presses play.
        assert!(session.audio);
        assert!(!session.animating);
        session.toggle_audio();
        session.toggle_animation();
        assert!(!session.audio);
        assert!(session.animating);
    }

    #[test]
    fn incomplete_contact_form_is_rejected_without_waiting() {
        let latency = RecordingLatency::default();
        let desk = ContactDesk::new(timings(), latency.clone());

        let form = ContactForm {
            name: "Sam".to_string(),
            ..ContactForm::default()
        };
        assert!(matches!(desk.submit(&form), Err(GuideError::InvalidInput(_))));
        assert!(latency.recorded().is_empty());
    }

    #[test]
    fn complete_contact_form_is_delivered() {
        let latency = RecordingLatency::default();
        let desk = ContactDesk::new(timings(), latency.clone());

        let form = ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice work".to_string(),
        };
        desk.submit(&form).unwrap();
        assert_eq!(latency.recorded(), vec![Duration::from_millis(1500)]);
    }
}
