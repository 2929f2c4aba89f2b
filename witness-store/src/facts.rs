//! Fact insertion: dispatch on the tag, allocate a fresh
//! clock tick per fact, write to the matching table.
//!
//! Parsers hand us facts with placeholder `(session_id, t) = ("", 0)`;
//! this module is where the real values get assigned, right before
//! the row hits disk.

use witness_core::errors::StoreError;
use witness_core::facts::{Fact, HookEventKind};
use witness_core::SessionId;

use crate::clock::Clock;
use crate::connection::Store;

/// Insert one fact, allocating a fresh tick for it. Returns the
/// allocated `t`.
pub fn insert_fact(store: &Store, session: &SessionId, fact: &Fact) -> Result<i64, StoreError> {
    let t = Clock::tick(store, session)?;
    insert_fact_at(store, session, t, fact)?;
    Ok(t)
}

/// Insert a fact at an already-allocated tick. Used by the post-
/// pipeline, which ticks once for the raw `ToolCall` row and then
/// once more per emitted structured fact — each insertion call
/// allocates its own tick via `insert_fact`, but this split lets
/// callers (and tests) pin a tick when replaying a known sequence.
fn insert_fact_at(
    store: &Store,
    session: &SessionId,
    t: i64,
    fact: &Fact,
) -> Result<(), StoreError> {
    let session_str = session.as_str();
    match fact {
        Fact::FileEvent(f) => store.execute(
            "INSERT INTO file_events (session_id, t, event, file_path) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![session_str, t, f.event.as_str(), f.file_path],
        ),
        Fact::TestResult(f) => store.execute(
            "INSERT INTO test_results (session_id, t, test_name, outcome, message) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![session_str, t, f.test_name, f.outcome.as_str(), f.message],
        ),
        Fact::LintResult(f) => store.execute(
            "INSERT INTO lint_results (session_id, t, file_path, line, rule, severity) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![session_str, t, f.file_path, f.line, f.rule, f.severity.as_str()],
        ),
        Fact::TypeError(f) => store.execute(
            "INSERT INTO type_errors (session_id, t, file_path, line, message) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![session_str, t, f.file_path, f.line, f.message],
        ),
        Fact::Import(f) => store.execute(
            "INSERT INTO imports (session_id, t, source_file, imported_module) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![session_str, t, f.source_file, f.imported_module],
        ),
        Fact::ToolCall(f) => store.execute(
            "INSERT INTO tool_calls (session_id, t, tool_name, tool_input, tool_output) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![session_str, t, f.tool_name, f.tool_input, f.tool_output],
        ),
    }
    .map(|_| ())
}

/// Append a `HookEvent` row: used for post-facto tailing by an
/// (out-of-scope) `witness watch`, never read back by the rule engine
/// itself.
#[allow(clippy::too_many_arguments)]
pub fn insert_hook_event(
    store: &Store,
    session: &SessionId,
    event: HookEventKind,
    tool_name: Option<&str>,
    action: &str,
    message: Option<&str>,
    payload: Option<&str>,
    result: Option<&str>,
) -> Result<i64, StoreError> {
    let t = Clock::tick(store, session)?;
    store.execute(
        "INSERT INTO hook_events (session_id, t, event, tool_name, action, message, payload, result)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![session.as_str(), t, event.as_str(), tool_name, action, message, payload, result],
    )?;
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use witness_core::facts::{FileEventFact, FileEventKind, ImportFact, ToolCallFact};

    #[test]
    fn insert_fact_allocates_increasing_ticks() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let f1 = Fact::FileEvent(FileEventFact {
            event: FileEventKind::Read,
            file_path: "a.ts".to_string(),
        });
        let f2 = Fact::FileEvent(FileEventFact {
            event: FileEventKind::Edit,
            file_path: "a.ts".to_string(),
        });
        let t1 = insert_fact(&store, &session, &f1).unwrap();
        let t2 = insert_fact(&store, &session, &f2).unwrap();
        assert!(t1 < t2);
    }

    #[test]
    fn tool_call_and_structured_facts_interleave_ticks() {
        // A Read tool call yields both a tool_calls row and a
        // file_events row, each with its own tick, and they must
        // come out strictly increasing.
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");

        let tool_call = Fact::ToolCall(ToolCallFact {
            tool_name: "Read".to_string(),
            tool_input: r#"{"path":"src/a.ts"}"#.to_string(),
            tool_output: Some("import x from \"y\"".to_string()),
        });
        let t_call = insert_fact(&store, &session, &tool_call).unwrap();

        let file_event = Fact::FileEvent(FileEventFact {
            event: FileEventKind::Read,
            file_path: "src/a.ts".to_string(),
        });
        let t_file = insert_fact(&store, &session, &file_event).unwrap();

        let import = Fact::Import(ImportFact {
            source_file: "src/a.ts".to_string(),
            imported_module: "y".to_string(),
        });
        let t_import = insert_fact(&store, &session, &import).unwrap();

        assert!(t_call < t_file);
        assert!(t_file < t_import);

        let tool_call_count: i64 = store
            .query("SELECT COUNT(*) FROM tool_calls WHERE session_id = ?1", [session.as_str()], |r| r.get(0))
            .unwrap()[0];
        assert_eq!(tool_call_count, 1);
    }

    #[test]
    fn hook_event_is_not_a_fact_variant_but_still_insertable() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        insert_hook_event(
            &store,
            &session,
            HookEventKind::Lint,
            Some("Edit"),
            "warn",
            Some("some message"),
            None,
            None,
        )
        .unwrap();
        let count: i64 = store
            .query("SELECT COUNT(*) FROM hook_events", [], |r| r.get(0))
            .unwrap()[0];
        assert_eq!(count, 1);
    }
}
