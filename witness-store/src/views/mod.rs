//! Derived views: read-side projections over the raw fact
//! tables, computed in-process rather than as stored SQL views — each
//! view fetches the relevant raw rows once (via [`raw`]) and folds or
//! walks them in Rust. This keeps the SQL surface to plain indexed
//! `SELECT`s and puts the session-discipline logic (what counts as a
//! regression, what counts as thrashing) in one place that is easy to
//! unit-test in isolation from SQLite.

pub mod activity;
pub mod clusters;
pub mod imports_graph;
pub mod raw;
pub mod regressions;
pub mod test_state;

pub use activity::{edited_but_unread, edits_since_last_test, thrashing, untested_edits};
pub use clusters::{error_clusters, likely_fixes};
pub use imports_graph::{blast_radius, depends_on};
pub use regressions::regressions;
pub use test_state::{current_test_state, failing_tests};
