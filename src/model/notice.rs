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

//! Transient notices shown over the current screen.
//!
//! Notices replace the toast popups of a browser: they carry a title and a
//! short description, can be dismissed, and expire after a number of UI
//! ticks.

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) title: String,
    pub(crate) description: String,
    remaining_ticks: u32,
}

impl Notice {
    pub(crate) fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title.into(), description.into())
    }

    pub(crate) fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title.into(), description.into())
    }

    /// Describes a domain error for the visitor.
    pub(crate) fn from_error(title: impl Into<String>, error: &GuideError) -> Self {
        let description = if error.is_recoverable() {
            error.to_string()
        } else {
            format!("{} (see the log for details)", error)
        };
        Self::error(title, description)
    }

    fn new(kind: NoticeKind, title: String, description: String) -> Self {
        Self {
            kind,
            title,
            description,
            remaining_ticks: 0,
        }
    }

    /// Sets how many ticks the notice stays up for.
    pub(crate) fn with_lifetime(mut self, ticks: u32) -> Self {
        self.remaining_ticks = ticks;
        self
    }

    /// Counts down one tick, returning `true` once the notice has expired.
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_its_lifetime() {
        let mut notice = Notice::info("Saved", "Added to favourites").with_lifetime(2);
        assert!(!notice.tick());
        assert!(notice.tick());
        assert!(notice.tick());
    }

    #[test]
    fn unrecoverable_errors_point_at_the_log() {
        let notice = Notice::from_error("Oops", &GuideError::InvalidData("bad".into()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.description.contains("log"));

        let notice = Notice::from_error("Scan Failed", &GuideError::PermissionDenied);
        assert_eq!(notice.description, "Camera permission denied");
    }
}
