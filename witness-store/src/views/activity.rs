//! Activity views: `edits_since_last_test`,
//! `edited_but_unread`, `untested_edits`, `thrashing`.

use std::collections::HashMap;

use witness_core::errors::StoreError;
use witness_core::facts::FileEventKind;
use witness_core::SessionId;

use crate::connection::Store;
use crate::views::raw;
use crate::views::test_state::failing_tests;

/// Count of edit events after the last test run in the session, or
/// `None` if no edits have happened since (including "no tests have
/// ever run" — every edit counts as "since", vacuously).
pub fn edits_since_last_test(store: &Store, session: &SessionId) -> Result<Option<u32>, StoreError> {
    let edits = raw::edit_events(store, session)?;
    if edits.is_empty() {
        return Ok(None);
    }
    let last_test_t = raw::all_test_results(store, session)?
        .into_iter()
        .map(|r| r.t)
        .max()
        .unwrap_or(0);
    let count = edits.iter().filter(|e| e.t > last_test_t).count() as u32;
    if count == 0 {
        Ok(None)
    } else {
        Ok(Some(count))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditedButUnread {
    pub file_path: String,
    pub edit_t: i64,
}

/// Files whose earliest edit in the session has no prior read event.
pub fn edited_but_unread(store: &Store, session: &SessionId) -> Result<Vec<EditedButUnread>, StoreError> {
    let events = raw::all_file_events(store, session)?;
    let mut earliest_edit: HashMap<String, i64> = HashMap::new();

    for e in &events {
        match e.event {
            FileEventKind::Read => {}
            FileEventKind::Edit | FileEventKind::Create => {
                earliest_edit.entry(e.file_path.clone()).or_insert(e.t);
            }
            FileEventKind::Delete => {}
        }
    }

    let mut rows: Vec<_> = earliest_edit
        .into_iter()
        .filter(|(path, edit_t)| {
            !events
                .iter()
                .any(|e| e.file_path == *path && e.event == FileEventKind::Read && e.t < *edit_t)
        })
        .map(|(file_path, edit_t)| EditedButUnread { file_path, edit_t })
        .collect();
    rows.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub struct UntestedEdit {
    pub file_path: String,
    pub edit_t: i64,
}

/// Files whose most recent edit has no test_result after it.
pub fn untested_edits(store: &Store, session: &SessionId) -> Result<Vec<UntestedEdit>, StoreError> {
    let edits = raw::edit_events(store, session)?;
    let last_test_t = raw::all_test_results(store, session)?
        .into_iter()
        .map(|r| r.t)
        .max();

    let mut last_edit: HashMap<String, i64> = HashMap::new();
    for e in &edits {
        last_edit.insert(e.file_path.clone(), e.t);
    }

    let mut rows: Vec<_> = last_edit
        .into_iter()
        .filter(|(_, edit_t)| last_test_t.map(|t| *edit_t > t).unwrap_or(true))
        .map(|(file_path, edit_t)| UntestedEdit { file_path, edit_t })
        .collect();
    rows.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thrashing {
    pub file_path: String,
    pub edit_count: u32,
}

/// Files edited repeatedly while tests stay red. An edit counter per
/// file accumulates across edit events; whenever the currently-failing
/// test set becomes empty (a clean run), every counter resets to zero
/// — a cycle completed successfully. The view reports the counters as
/// they stand at the end of the session's event stream, for every file
/// with a nonzero count while at least one test is still failing. The
/// `no_thrashing` rule applies the configurable threshold; this view
/// just reports the raw count.
pub fn thrashing(store: &Store, session: &SessionId) -> Result<Vec<Thrashing>, StoreError> {
    let events = raw::all_file_events(store, session)?;
    let results = raw::all_test_results(store, session)?;

    #[derive(Clone, Copy)]
    enum Event<'a> {
        Edit(&'a str),
        Test,
    }
    let mut timeline: Vec<(i64, Event)> = Vec::new();
    for e in &events {
        if e.event == FileEventKind::Edit {
            timeline.push((e.t, Event::Edit(&e.file_path)));
        }
    }
    for r in &results {
        timeline.push((r.t, Event::Test));
    }
    timeline.sort_by_key(|(t, _)| *t);

    let mut counts: HashMap<String, u32> = HashMap::new();
    for (t, ev) in timeline {
        match ev {
            Event::Edit(path) => {
                *counts.entry(path.to_string()).or_insert(0) += 1;
            }
            Event::Test => {
                let currently_failing = results.iter().any(|r| r.t <= t) && {
                    // Recompute the failing set as of this point: the latest
                    // outcome per test among results with t' <= t.
                    let mut latest: HashMap<&str, &raw::RawTestResult> = HashMap::new();
                    for r in results.iter().filter(|r| r.t <= t) {
                        latest.insert(r.test_name.as_str(), r);
                    }
                    latest
                        .values()
                        .any(|r| r.outcome == witness_core::facts::TestOutcome::Fail)
                };
                if !currently_failing {
                    counts.clear();
                }
            }
        }
    }

    let failing = !failing_tests(store, session)?.is_empty();
    let mut rows: Vec<_> = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .filter(|_| failing)
        .map(|(file_path, edit_count)| Thrashing { file_path, edit_count })
        .collect();
    rows.sort_by(|a, b| a.file_path.cmp(&b.file_path));
    Ok(rows)
}
