//! `Store` — the single-file persistent append-only fact log. Each
//! pipeline invocation is its own short-lived process operating
//! strictly sequentially, so there is no reader/writer pool to manage
//! here — just one `rusqlite::Connection` held for the life of the
//! process.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Params};

use witness_core::errors::StoreError;

use crate::schema;

/// A handle owning the connection to the fact store. No component
/// holds references to fact rows across operations — every read
/// re-queries.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (or create) the store at `path`. Ensures the containing
    /// directory exists, enables WAL, and applies the schema
    /// idempotently.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }
        let conn = Connection::open(path).map_err(|e| StoreError::Sqlite {
            message: e.to_string(),
        })?;
        schema::apply_pragmas(&conn)?;
        schema::apply(&conn)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory store, for tests. WAL is meaningless for
    /// `:memory:` databases, so the pragma is skipped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Sqlite {
            message: e.to_string(),
        })?;
        schema::apply(&conn)?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Execute a parameterized statement with no result rows.
    pub fn execute(&self, sql: &str, params: impl Params) -> Result<usize, StoreError> {
        self.conn.execute(sql, params).map_err(|e| StoreError::Sqlite {
            message: e.to_string(),
        })
    }

    /// Run `f` against the underlying connection and collect typed
    /// rows. Kept generic so callers (fact insertion, views) each
    /// bring their own row mapper instead of this crate owning a
    /// parallel per-table API surface.
    pub fn query<T>(
        &self,
        sql: &str,
        params: impl Params,
        mut mapper: impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>, StoreError> {
        let mut stmt = self.conn.prepare_cached(sql).map_err(|e| StoreError::Sqlite {
            message: e.to_string(),
        })?;
        let rows = stmt
            .query_map(params, |row| mapper(row))
            .map_err(|e| StoreError::Sqlite {
                message: e.to_string(),
            })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| StoreError::Sqlite {
                message: e.to_string(),
            })?);
        }
        Ok(out)
    }

    /// Raw access to the underlying connection for modules within
    /// this crate that need statement-level control (the clock's
    /// atomic upsert, batched fact inserts).
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_in_memory_applies_schema() {
        let store = Store::open_in_memory().unwrap();
        let count: i64 = store
            .query("SELECT COUNT(*) FROM tool_calls", [], |row| row.get(0))
            .unwrap()[0];
        assert_eq!(count, 0);
    }

    #[test]
    fn open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("witness.db");
        let store = Store::open(&db_path).unwrap();
        assert!(db_path.exists());
        assert_eq!(store.path(), Some(db_path.as_path()));
    }

    #[test]
    fn reopening_existing_store_applies_schema_idempotently() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("witness.db");
        {
            let _store = Store::open(&db_path).unwrap();
        }
        let _store_again = Store::open(&db_path).unwrap();
    }
}
