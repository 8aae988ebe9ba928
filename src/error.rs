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

//! Domain error types.
//!
//! Application plumbing reports failures through [`anyhow`], but anything the
//! guide itself can get wrong (an unknown scan code, a route that does not
//! exist, a broken data set) is described here so that callers can decide how
//! to surface it to the visitor.

use crate::model::ScanKind;

#[derive(Debug, thiserror::Error)]
pub(crate) enum GuideError {
    #[error("No artwork found for {kind} code {code}")]
    UnknownCode { kind: ScanKind, code: String },

    #[error("Artwork not found: {0}")]
    UnknownArtwork(String),

    #[error("Tour not found: {0}")]
    UnknownTour(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid museum data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) type GuideResult<T> = Result<T, GuideError>;

impl GuideError {
    /// Whether the error is something the visitor caused and can recover from
    /// by trying again, as opposed to a fault in the application itself.
    pub(crate) fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GuideError::InvalidData(_) | GuideError::Storage(_) | GuideError::Json(_)
        )
    }
}
