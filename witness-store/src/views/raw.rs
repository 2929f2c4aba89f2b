//! Shared raw-row fetchers used by more than one view. Every view
//! filters by `session_id` by construction, since these helpers take it as a required
//! parameter and bake it into the `WHERE` clause.

use witness_core::errors::StoreError;
use witness_core::facts::{FileEventKind, TestOutcome};
use witness_core::SessionId;

use crate::connection::Store;

#[derive(Debug, Clone)]
pub struct RawTestResult {
    pub test_name: String,
    pub outcome: TestOutcome,
    pub message: Option<String>,
    pub t: i64,
}

#[derive(Debug, Clone)]
pub struct RawFileEvent {
    pub event: FileEventKind,
    pub file_path: String,
    pub t: i64,
}

#[derive(Debug, Clone)]
pub struct RawImport {
    pub source_file: String,
    pub imported_module: String,
    pub t: i64,
}

fn parse_outcome(s: String) -> TestOutcome {
    TestOutcome::from_str(&s).unwrap_or(TestOutcome::Error)
}

fn parse_event(s: String) -> FileEventKind {
    match s.as_str() {
        "read" => FileEventKind::Read,
        "edit" => FileEventKind::Edit,
        "create" => FileEventKind::Create,
        "delete" => FileEventKind::Delete,
        _ => FileEventKind::Edit,
    }
}

/// All test results for `session`, ordered by `t` ascending.
pub fn all_test_results(store: &Store, session: &SessionId) -> Result<Vec<RawTestResult>, StoreError> {
    store.query(
        "SELECT test_name, outcome, message, t FROM test_results WHERE session_id = ?1 ORDER BY t ASC",
        [session.as_str()],
        |row| {
            Ok(RawTestResult {
                test_name: row.get(0)?,
                outcome: parse_outcome(row.get::<_, String>(1)?),
                message: row.get(2)?,
                t: row.get(3)?,
            })
        },
    )
}

/// All file events for `session`, ordered by `t` ascending.
pub fn all_file_events(store: &Store, session: &SessionId) -> Result<Vec<RawFileEvent>, StoreError> {
    store.query(
        "SELECT event, file_path, t FROM file_events WHERE session_id = ?1 ORDER BY t ASC",
        [session.as_str()],
        |row| {
            Ok(RawFileEvent {
                event: parse_event(row.get::<_, String>(0)?),
                file_path: row.get(1)?,
                t: row.get(2)?,
            })
        },
    )
}

/// All edit events for `session`, ordered by `t` ascending.
pub fn edit_events(store: &Store, session: &SessionId) -> Result<Vec<RawFileEvent>, StoreError> {
    Ok(all_file_events(store, session)?
        .into_iter()
        .filter(|e| e.event == FileEventKind::Edit)
        .collect())
}

/// All read events for `session`, ordered by `t` ascending.
pub fn read_events(store: &Store, session: &SessionId) -> Result<Vec<RawFileEvent>, StoreError> {
    Ok(all_file_events(store, session)?
        .into_iter()
        .filter(|e| e.event == FileEventKind::Read)
        .collect())
}

/// All imports for `session`, ordered by `t` ascending.
pub fn all_imports(store: &Store, session: &SessionId) -> Result<Vec<RawImport>, StoreError> {
    store.query(
        "SELECT source_file, imported_module, t FROM imports WHERE session_id = ?1 ORDER BY t ASC",
        [session.as_str()],
        |row| {
            Ok(RawImport {
                source_file: row.get(0)?,
                imported_module: row.get(1)?,
                t: row.get(2)?,
            })
        },
    )
}
