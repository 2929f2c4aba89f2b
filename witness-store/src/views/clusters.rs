//! Diagnostic views: `error_clusters`, `likely_fixes`.

use std::collections::HashMap;

use witness_core::errors::StoreError;
use witness_core::facts::TestOutcome;
use witness_core::SessionId;

use crate::connection::Store;
use crate::views::raw;
use crate::views::test_state::failing_tests;

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCluster {
    pub message: String,
    pub test_names: Vec<String>,
}

/// Currently-failing tests grouped by identical failure message.
/// Clusters of size 1 (a message unique to one test) are dropped —
/// there is nothing to "cluster".
pub fn error_clusters(store: &Store, session: &SessionId) -> Result<Vec<ErrorCluster>, StoreError> {
    let failing = failing_tests(store, session)?;
    let mut by_message: HashMap<String, Vec<String>> = HashMap::new();
    for t in failing {
        let Some(message) = t.message else {
            continue;
        };
        by_message.entry(message).or_default().push(t.test_name);
    }

    let mut rows: Vec<_> = by_message
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(message, mut test_names)| {
            test_names.sort();
            ErrorCluster { message, test_names }
        })
        .collect();
    rows.sort_by(|a, b| a.message.cmp(&b.message));
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LikelyFix {
    pub file_path: String,
    pub test_name: String,
    pub edit_t: i64,
    pub pass_t: i64,
}

/// An edit event immediately followed by a fail -> pass transition on
/// some test, with no intervening edit to any file. "Immediately" means
/// the next test_result row for that test after the edit is the pass,
/// and the pass is the fail's direct successor in that test's history.
pub fn likely_fixes(store: &Store, session: &SessionId) -> Result<Vec<LikelyFix>, StoreError> {
    let edits = raw::edit_events(store, session)?;
    let results = raw::all_test_results(store, session)?;

    let mut by_test: HashMap<String, Vec<raw::RawTestResult>> = HashMap::new();
    for r in results {
        by_test.entry(r.test_name.clone()).or_default().push(r);
    }

    let mut rows = Vec::new();
    for (test_name, history) in &by_test {
        for window in history.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if prev.outcome != TestOutcome::Fail || next.outcome != TestOutcome::Pass {
                continue;
            }
            // The edit immediately preceding this pass, with no other
            // edit between it and the pass.
            let candidate = edits
                .iter()
                .filter(|e| e.t < next.t)
                .max_by_key(|e| e.t);
            let Some(candidate) = candidate else {
                continue;
            };
            if candidate.t <= prev.t {
                continue;
            }
            rows.push(LikelyFix {
                file_path: candidate.file_path.clone(),
                test_name: test_name.clone(),
                edit_t: candidate.t,
                pass_t: next.t,
            });
        }
    }

    rows.sort_by(|a, b| a.test_name.cmp(&b.test_name).then(a.pass_t.cmp(&b.pass_t)));
    Ok(rows)
}
