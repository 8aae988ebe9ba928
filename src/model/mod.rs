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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the guide (artworks, gallery
//! sections and tours) together with the small pieces of state that screens
//! share, such as the favourites registry and tour progression.

pub(crate) mod contact;
pub(crate) mod favourites;
pub(crate) mod notice;
pub(crate) mod portfolio;
pub(crate) mod tour;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Paintings,
    Sculptures,
    Historical,
}

impl Category {
    pub(crate) const ALL: [Category; 3] = [
        Category::Paintings,
        Category::Sculptures,
        Category::Historical,
    ];

    /// The identifier used in gallery paths, e.g. `/gallery/paintings`.
    pub(crate) fn id(self) -> &'static str {
        match self {
            Category::Paintings => "paintings",
            Category::Sculptures => "sculptures",
            Category::Historical => "historical",
        }
    }

    pub(crate) fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Artwork {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) year: String,
    pub(crate) image: String,
    pub(crate) category: Category,
    pub(crate) location: String,
    pub(crate) qr_code: String,
    pub(crate) nfc_code: String,
    pub(crate) description: String,
    pub(crate) artist_info: String,
    pub(crate) historical_context: String,
    pub(crate) cultural_significance: String,
    pub(crate) techniques: String,
    pub(crate) medium: String,
    pub(crate) dimensions: String,
    pub(crate) provenance: String,
    pub(crate) interesting_facts: Vec<String>,
}

impl Artwork {
    /// The code this artwork answers to for the given kind of scan.
    pub(crate) fn code(&self, kind: ScanKind) -> &str {
        match kind {
            ScanKind::Qr => &self.qr_code,
            ScanKind::Nfc => &self.nfc_code,
        }
    }
}

/// A gallery section. The number of artworks it holds is derived from the
/// artwork collection, see [`crate::data::Museum::artwork_count`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Section {
    pub(crate) id: Category,
    pub(crate) name: String,
    pub(crate) icon: String,
    pub(crate) description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Stop {
    pub(crate) artwork: String,
    pub(crate) duration: String,
    pub(crate) focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Tour {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) duration: String,
    pub(crate) description: String,
    pub(crate) stops: Vec<Stop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanKind {
    Qr,
    Nfc,
}

impl ScanKind {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "qr" => Some(ScanKind::Qr),
            "nfc" => Some(ScanKind::Nfc),
            _ => None,
        }
    }

    pub(crate) fn toggle(self) -> Self {
        match self {
            ScanKind::Qr => ScanKind::Nfc,
            ScanKind::Nfc => ScanKind::Qr,
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanKind::Qr => f.write_str("QR"),
            ScanKind::Nfc => f.write_str("NFC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert_eq!(Category::from_id("ceramics"), None);
    }

    #[test]
    fn scan_kind_parse_is_case_insensitive() {
        assert_eq!(ScanKind::parse("QR"), Some(ScanKind::Qr));
        assert_eq!(ScanKind::parse("nfc"), Some(ScanKind::Nfc));
        assert_eq!(ScanKind::parse("barcode"), None);
        assert_eq!(ScanKind::Qr.toggle(), ScanKind::Nfc);
    }
}
