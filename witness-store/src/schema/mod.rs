//! The base schema: eight fact tables plus their indexes. Guarded
//! entirely by `IF NOT EXISTS` so applying it twice is equivalent to
//! applying it once.
//!
//! Views are not materialized as SQL views here — they are computed
//! in-process (see `witness_store::views`); the contract is
//! behavioral, not the storage shape.

use rusqlite::Connection;

use witness_core::errors::StoreError;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS clock (
    session_id TEXT PRIMARY KEY,
    current_t  INTEGER NOT NULL
) STRICT;

CREATE TABLE IF NOT EXISTS tool_calls (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    tool_name   TEXT NOT NULL,
    tool_input  TEXT NOT NULL,
    tool_output TEXT,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_tool_calls_session_t ON tool_calls(session_id, t);

CREATE TABLE IF NOT EXISTS hook_events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    event       TEXT NOT NULL,
    tool_name   TEXT,
    action      TEXT NOT NULL,
    message     TEXT,
    payload     TEXT,
    result      TEXT,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_hook_events_session_t ON hook_events(session_id, t);

CREATE TABLE IF NOT EXISTS file_events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    event       TEXT NOT NULL,
    file_path   TEXT NOT NULL,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_file_events_session_t ON file_events(session_id, t);
CREATE INDEX IF NOT EXISTS idx_file_events_session_path ON file_events(session_id, file_path);

CREATE TABLE IF NOT EXISTS test_results (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    test_name   TEXT NOT NULL,
    outcome     TEXT NOT NULL,
    message     TEXT,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_test_results_session_t ON test_results(session_id, t);
CREATE INDEX IF NOT EXISTS idx_test_results_session_name ON test_results(session_id, test_name);

CREATE TABLE IF NOT EXISTS lint_results (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    file_path   TEXT NOT NULL,
    line        INTEGER,
    rule        TEXT NOT NULL,
    severity    TEXT NOT NULL,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_lint_results_session_t ON lint_results(session_id, t);
CREATE INDEX IF NOT EXISTS idx_lint_results_session_path ON lint_results(session_id, file_path);

CREATE TABLE IF NOT EXISTS type_errors (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id  TEXT NOT NULL,
    t           INTEGER NOT NULL,
    file_path   TEXT NOT NULL,
    line        INTEGER,
    message     TEXT NOT NULL,
    ts          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_type_errors_session_t ON type_errors(session_id, t);
CREATE INDEX IF NOT EXISTS idx_type_errors_session_path ON type_errors(session_id, file_path);

CREATE TABLE IF NOT EXISTS imports (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id      TEXT NOT NULL,
    t               INTEGER NOT NULL,
    source_file     TEXT NOT NULL,
    imported_module TEXT NOT NULL,
    ts              TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
CREATE INDEX IF NOT EXISTS idx_imports_session_t ON imports(session_id, t);
CREATE INDEX IF NOT EXISTS idx_imports_session_source ON imports(session_id, source_file);
"#;

/// Open PRAGMAs appropriate for a single-writer, short-lived-process
/// workload: WAL for crash-atomicity at the statement level,
/// a busy timeout since two pipeline invocations could in principle
/// overlap briefly, and a normal synchronous level since every fact is
/// an independent append.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| StoreError::Sqlite {
        message: e.to_string(),
    })
}

/// Apply the schema. Idempotent: every statement is guarded by
/// `IF NOT EXISTS`.
pub fn apply(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA_SQL).map_err(|e| StoreError::Sqlite {
        message: e.to_string(),
    })
}
