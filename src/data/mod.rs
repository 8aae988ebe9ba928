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

//! The museum data store.
//!
//! Sections, artworks and tours are bundled into the binary as JSON and
//! validated when loaded, so that the rest of the application can rely on a
//! few invariants:
//!
//! * artwork ids, QR codes and NFC codes are unique;
//! * every tour has at least one stop and every stop names a real artwork;
//! * every artwork category has a gallery section.
//!
//! Section sizes are always computed from the artwork collection rather than
//! stored alongside the section.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{GuideError, GuideResult},
    model::{Artwork, Category, ScanKind, Section, Stop, Tour, portfolio::Portfolio},
};

const MUSEUM_JSON: &str = include_str!("museum.json");
const PORTFOLIO_JSON: &str = include_str!("portfolio.json");

/// Identifier of the tour assembled from a visitor's favourites.
pub(crate) const CUSTOM_TOUR_ID: &str = "custom";

const CUSTOM_STOP_DURATION: &str = "5 minutes";

#[derive(Deserialize)]
struct MuseumRecords {
    sections: Vec<Section>,
    artworks: Vec<Artwork>,
    tours: Vec<Tour>,
}

#[derive(Debug)]
pub(crate) struct Museum {
    sections: Vec<Section>,
    artworks: Vec<Artwork>,
    tours: Vec<Tour>,
    index: HashMap<String, usize>,
}

impl Museum {
    /// Loads the bundled museum data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed or breaks one of the
    /// data set invariants.
    pub(crate) fn load() -> GuideResult<Self> {
        Self::from_json(MUSEUM_JSON)
    }

    pub(crate) fn from_json(json: &str) -> GuideResult<Self> {
        let records: MuseumRecords = serde_json::from_str(json)?;

        let index = validate(&records)?;

        debug!(
            sections = records.sections.len(),
            artworks = records.artworks.len(),
            tours = records.tours.len(),
            "Loaded museum data"
        );

        Ok(Self {
            sections: records.sections,
            artworks: records.artworks,
            tours: records.tours,
            index,
        })
    }

    pub(crate) fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub(crate) fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == category)
    }

    pub(crate) fn artwork_count(&self, category: Category) -> usize {
        self.artworks_in(category).count()
    }

    pub(crate) fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub(crate) fn artworks_in(&self, category: Category) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter().filter(move |a| a.category == category)
    }

    pub(crate) fn artwork(&self, id: &str) -> Option<&Artwork> {
        self.index.get(id).map(|&i| &self.artworks[i])
    }

    pub(crate) fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub(crate) fn tour(&self, id: &str) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    /// Finds the artwork answering to a scanned code.
    ///
    /// This is a straight scan over the collection comparing the code field
    /// for the kind of scan; the collection is small enough that an index
    /// buys nothing.
    pub(crate) fn find_by_code(&self, kind: ScanKind, code: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.code(kind) == code)
    }

    /// Builds an ad-hoc tour visiting the given artworks in order.
    ///
    /// Unknown ids are skipped. Returns `None` if nothing is left to visit.
    pub(crate) fn custom_tour(&self, artwork_ids: &[String]) -> Option<Tour> {
        let stops: Vec<Stop> = artwork_ids
            .iter()
            .filter_map(|id| self.artwork(id))
            .map(|artwork| Stop {
                artwork: artwork.id.clone(),
                duration: CUSTOM_STOP_DURATION.to_string(),
                focus: format!("{} by {}", artwork.title, artwork.artist),
            })
            .collect();

        if stops.is_empty() {
            return None;
        }

        Some(Tour {
            id: CUSTOM_TOUR_ID.to_string(),
            name: "Your Favourites".to_string(),
            duration: format!("{} minutes", stops.len() * 5),
            description: "A personal tour through the artworks you saved".to_string(),
            stops,
        })
    }
}

/// Checks the data set invariants, returning the artwork id index on success.
fn validate(records: &MuseumRecords) -> GuideResult<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(records.artworks.len());
    let mut qr_codes = HashSet::new();
    let mut nfc_codes = HashSet::new();

    for (i, artwork) in records.artworks.iter().enumerate() {
        if index.insert(artwork.id.clone(), i).is_some() {
            return Err(invalid(format!("duplicate artwork id '{}'", artwork.id)));
        }
        if !qr_codes.insert(artwork.qr_code.as_str()) {
            return Err(invalid(format!("duplicate QR code '{}'", artwork.qr_code)));
        }
        if !nfc_codes.insert(artwork.nfc_code.as_str()) {
            return Err(invalid(format!("duplicate NFC code '{}'", artwork.nfc_code)));
        }
        if !records.sections.iter().any(|s| s.id == artwork.category) {
            return Err(invalid(format!(
                "artwork '{}' has no section for category '{}'",
                artwork.id, artwork.category
            )));
        }
    }

    for tour in &records.tours {
        if tour.stops.is_empty() {
            return Err(invalid(format!("tour '{}' has no stops", tour.id)));
        }
        if let Some(stop) = tour.stops.iter().find(|s| !index.contains_key(&s.artwork)) {
            return Err(invalid(format!(
                "tour '{}' visits unknown artwork '{}'",
                tour.id, stop.artwork
            )));
        }
    }

    Ok(index)
}

fn invalid(message: String) -> GuideError {
    GuideError::InvalidData(message)
}

/// Loads the bundled portfolio records.
///
/// # Errors
///
/// Returns an error if the bundled JSON is malformed.
pub(crate) fn load_portfolio() -> GuideResult<Portfolio> {
    Ok(serde_json::from_str(PORTFOLIO_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn museum() -> Museum {
        Museum::load().expect("bundled data is valid")
    }

    fn records() -> serde_json::Value {
        serde_json::from_str(MUSEUM_JSON).unwrap()
    }

    #[test]
    fn every_artwork_resolves_by_its_own_codes() {
        let museum = museum();
        for artwork in museum.artworks() {
            for kind in [ScanKind::Qr, ScanKind::Nfc] {
                let found = museum.find_by_code(kind, artwork.code(kind)).unwrap();
                assert_eq!(found.id, artwork.id);
            }
        }
    }

    #[test]
    fn qr002_is_the_starry_night() {
        let museum = museum();
        let artwork = museum.find_by_code(ScanKind::Qr, "QR002").unwrap();
        assert_eq!(artwork.title, "The Starry Night");
        assert!(museum.find_by_code(ScanKind::Qr, "QR999").is_none());
    }

    #[test]
    fn codes_do_not_cross_kinds() {
        let museum = museum();
        assert!(museum.find_by_code(ScanKind::Nfc, "QR001").is_none());
        assert!(museum.find_by_code(ScanKind::Qr, "NFC001").is_none());
    }

    #[test]
    fn section_counts_are_computed_from_artworks() {
        let museum = museum();
        assert_eq!(museum.artwork_count(Category::Paintings), 3);
        assert_eq!(museum.artwork_count(Category::Sculptures), 2);
        assert_eq!(museum.artwork_count(Category::Historical), 2);

        let total: usize = Category::ALL.iter().map(|&c| museum.artwork_count(c)).sum();
        assert_eq!(total, museum.artworks().len());
    }

    #[test]
    fn every_tour_stop_resolves() {
        let museum = museum();
        for tour in museum.tours() {
            for stop in &tour.stops {
                assert!(museum.artwork(&stop.artwork).is_some(), "{}", stop.artwork);
            }
        }
        assert_eq!(museum.tour("highlights-tour").unwrap().stops.len(), 4);
        assert!(museum.tour("night-tour").is_none());
    }

    #[test]
    fn duplicate_qr_code_is_rejected() {
        let mut value = records();
        value["artworks"][1]["qr_code"] = "QR001".into();

        let err = Museum::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, GuideError::InvalidData(ref m) if m.contains("QR001")));
    }

    #[test]
    fn dangling_tour_stop_is_rejected() {
        let mut value = records();
        value["tours"][0]["stops"][0]["artwork"] = "the-scream".into();

        let err = Museum::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, GuideError::InvalidData(ref m) if m.contains("the-scream")));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Museum::from_json("{"), Err(GuideError::Json(_))));
    }

    #[test]
    fn custom_tour_skips_unknown_artworks() {
        let museum = museum();
        let ids = vec!["david".to_string(), "missing".to_string(), "mona-lisa".to_string()];

        let tour = museum.custom_tour(&ids).unwrap();
        assert_eq!(tour.id, CUSTOM_TOUR_ID);
        let stops: Vec<&str> = tour.stops.iter().map(|s| s.artwork.as_str()).collect();
        assert_eq!(stops, ["david", "mona-lisa"]);

        assert!(museum.custom_tour(&["missing".to_string()]).is_none());
    }

    #[test]
    fn portfolio_loads() {
        let portfolio = load_portfolio().unwrap();
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.experience.is_empty());
    }
}
