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

//! The visitor's favourites.
//!
//! This module provides the favourites registry: an ordered set of artwork
//! ids persisted as a JSON array under a single storage key.
//!
//! Every mutation writes the whole set back before returning. Registries
//! sharing one store do not coordinate, so concurrent writers race and the
//! last write wins.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{error::GuideResult, store::KeyValueStore};

pub(crate) const FAVOURITES_KEY: &str = "amuse_favorites";

pub(crate) struct Favourites {
    store: Box<dyn KeyValueStore>,
    ids: Vec<String>,
    members: HashSet<String>,
}

impl Favourites {
    /// Opens the registry over `store`.
    ///
    /// A missing or unreadable entry is treated as an empty set; this never
    /// fails.
    pub(crate) fn open(store: Box<dyn KeyValueStore>) -> Self {
        let ids = read_ids(store.as_ref());
        let members = ids.iter().cloned().collect();

        Self {
            store,
            ids,
            members,
        }
    }

    pub(crate) fn list(&self) -> &[String] {
        &self.ids
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn contains(&self, artwork_id: &str) -> bool {
        self.members.contains(artwork_id)
    }

    /// Adds an artwork, doing nothing if it is already a favourite.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated set cannot be persisted, in which case
    /// the registry is left unchanged.
    pub(crate) fn add(&mut self, artwork_id: &str) -> GuideResult<&[String]> {
        if !self.contains(artwork_id) {
            let mut ids = self.ids.clone();
            ids.push(artwork_id.to_string());
            self.commit(ids)?;
        }

        Ok(&self.ids)
    }

    /// Removes an artwork, doing nothing if it is not a favourite.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated set cannot be persisted, in which case
    /// the registry is left unchanged.
    pub(crate) fn remove(&mut self, artwork_id: &str) -> GuideResult<&[String]> {
        if self.contains(artwork_id) {
            let ids = self.ids.iter().filter(|id| *id != artwork_id).cloned().collect();
            self.commit(ids)?;
        }

        Ok(&self.ids)
    }

    /// Adds the artwork if absent, removes it otherwise. Returns whether the
    /// artwork is a favourite afterwards.
    pub(crate) fn toggle(&mut self, artwork_id: &str) -> GuideResult<bool> {
        if self.contains(artwork_id) {
            self.remove(artwork_id)?;
            Ok(false)
        } else {
            self.add(artwork_id)?;
            Ok(true)
        }
    }

    pub(crate) fn clear(&mut self) -> GuideResult<()> {
        self.commit(Vec::new())
    }

    fn commit(&mut self, ids: Vec<String>) -> GuideResult<()> {
        let bytes = serde_json::to_vec(&ids)?;
        self.store.set(FAVOURITES_KEY, &bytes)?;

        debug!(count = ids.len(), "Saved favourites");

        self.members = ids.iter().cloned().collect();
        self.ids = ids;

        Ok(())
    }
}

fn read_ids(store: &dyn KeyValueStore) -> Vec<String> {
    let bytes = match store.get(FAVOURITES_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read favourites, starting empty: {}", e);
            return Vec::new();
        }
    };

    let ids: Vec<String> = match serde_json::from_slice(&bytes) {
        Ok(ids) => ids,
        Err(e) => {
            warn!("Ignoring malformed favourites: {}", e);
            return Vec::new();
        }
    };

    // Older writers may have left duplicates behind, keep the first of each.
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
