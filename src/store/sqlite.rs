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

//! SQLite backed key/value store.
//!
//! A single `kv` table keyed by text holds opaque blobs. The connection is
//! configured the same way as any other long-lived database in the
//! application: WAL journalling, `NORMAL` synchronous mode and a cache of
//! prepared statements.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::{
    error::{GuideError, GuideResult},
    store::KeyValueStore,
};

pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if necessary) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The database file cannot be opened.
    /// * WAL journalling cannot be enabled.
    /// * The schema cannot be created.
    pub(crate) fn open(path: &Path) -> GuideResult<Self> {
        let conn = Connection::open(path)?;

        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            return Err(GuideError::InvalidData(format!(
                "failed to switch to WAL mode, current mode: {}",
                journal_mode
            )));
        }

        conn.execute_batch(
            "
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        conn.set_prepared_statement_cache_capacity(16);

        create_schema(&conn)?;

        debug!(path = %path.display(), "Opened key/value store");

        Ok(Self { conn })
    }
}

fn create_schema(conn: &Connection) -> GuideResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value BLOB NOT NULL
        );",
    )?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> GuideResult<Option<Vec<u8>>> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?")?;
        let value: Option<Vec<u8>> = stmt.query_row([key], |row| row.get(0)).optional()?;

        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> GuideResult<()> {
        let sql = "
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT (key)
            DO UPDATE SET value = ?2";

        let mut stmt = self.conn.prepare_cached(sql)?;
        stmt.execute(params![key, value])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amuse.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("amuse_favorites", br#"["david"]"#).unwrap();
            store.set("amuse_favorites", br#"["david","mona-lisa"]"#).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("amuse_favorites").unwrap().as_deref(),
            Some(&br#"["david","mona-lisa"]"#[..])
        );
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
