//! `regressions`.
//!
//! A test appears iff: (a) its current outcome is fail, (b) it passed
//! at some `pass_t` before that, (c) an edit landed strictly between
//! that pass and the fail, and (d) the test had not already failed
//! again between the pass and that edit (the edit is plausibly *why*
//! it broke, not just one of several edits during an already-broken
//! stretch). When several edits satisfy (c)/(d), one row is emitted
//! per qualifying edit — the rule layer is
//! the one that de-duplicates by test name before reporting a count.

use std::collections::HashMap;

use witness_core::errors::StoreError;
use witness_core::facts::TestOutcome;
use witness_core::SessionId;

use crate::connection::Store;
use crate::views::raw;

#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub test_name: String,
    pub message: Option<String>,
    pub pass_t: i64,
    pub edit_t: i64,
    pub fail_t: i64,
    pub likely_cause: String,
}

pub fn regressions(store: &Store, session: &SessionId) -> Result<Vec<Regression>, StoreError> {
    let results = raw::all_test_results(store, session)?;
    let edits = raw::edit_events(store, session)?;

    let mut by_test: HashMap<String, Vec<raw::RawTestResult>> = HashMap::new();
    for r in results {
        by_test.entry(r.test_name.clone()).or_default().push(r);
    }

    let mut rows = Vec::new();
    for (test_name, history) in by_test {
        let Some(current) = history.last() else {
            continue;
        };
        if current.outcome != TestOutcome::Fail {
            continue;
        }
        let fail_t = current.t;

        let pass_t = history
            .iter()
            .filter(|r| r.t < fail_t && r.outcome == TestOutcome::Pass)
            .map(|r| r.t)
            .max();
        let Some(pass_t) = pass_t else {
            continue;
        };

        for edit in edits.iter().filter(|e| pass_t < e.t && e.t < fail_t) {
            let re_broke_before_edit = history
                .iter()
                .any(|r| pass_t < r.t && r.t < edit.t && r.outcome == TestOutcome::Fail);
            if re_broke_before_edit {
                continue;
            }
            rows.push(Regression {
                test_name: test_name.clone(),
                message: current.message.clone(),
                pass_t,
                edit_t: edit.t,
                fail_t,
                likely_cause: edit.file_path.clone(),
            });
        }
    }

    rows.sort_by(|a, b| a.test_name.cmp(&b.test_name).then(a.edit_t.cmp(&b.edit_t)));
    Ok(rows)
}
