//! `current_test_state` and `failing_tests`.

use std::collections::HashMap;

use witness_core::errors::StoreError;
use witness_core::facts::TestOutcome;
use witness_core::SessionId;

use crate::connection::Store;
use crate::views::raw;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentTestState {
    pub test_name: String,
    pub outcome: TestOutcome,
    pub message: Option<String>,
    pub t: i64,
}

/// For each `(session_id, test_name)`, the row with the maximum `t`.
pub fn current_test_state(
    store: &Store,
    session: &SessionId,
) -> Result<Vec<CurrentTestState>, StoreError> {
    let results = raw::all_test_results(store, session)?;
    let mut latest: HashMap<String, CurrentTestState> = HashMap::new();
    for r in results {
        latest.insert(
            r.test_name.clone(),
            CurrentTestState {
                test_name: r.test_name,
                outcome: r.outcome,
                message: r.message,
                t: r.t,
            },
        );
    }
    let mut rows: Vec<_> = latest.into_values().collect();
    rows.sort_by(|a, b| a.test_name.cmp(&b.test_name));
    Ok(rows)
}

/// Rows of `current_test_state` with `outcome = fail`.
pub fn failing_tests(store: &Store, session: &SessionId) -> Result<Vec<CurrentTestState>, StoreError> {
    Ok(current_test_state(store, session)?
        .into_iter()
        .filter(|r| r.outcome == TestOutcome::Fail)
        .collect())
}
