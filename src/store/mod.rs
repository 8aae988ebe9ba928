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

//! Key/value persistence.
//!
//! The guide persists very little (the visitor's favourites) so storage is
//! modelled as a plain key/value port. The application uses the SQLite
//! backed [`SqliteStore`]; tests and throwaway sessions use [`MemoryStore`].

mod sqlite;

pub(crate) use sqlite::SqliteStore;

use std::collections::HashMap;

use crate::error::GuideResult;

/// A byte-oriented key/value store.
///
/// Writes replace the whole value for a key. There is no locking: two
/// writers sharing a key race and the later write wins.
pub(crate) trait KeyValueStore: Send {
    fn get(&self, key: &str) -> GuideResult<Option<Vec<u8>>>;

    fn set(&mut self, key: &str, value: &[u8]) -> GuideResult<()>;
}

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GuideResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> GuideResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
