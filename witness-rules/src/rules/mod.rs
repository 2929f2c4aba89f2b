//! The seven concrete rules. `all()` returns them in the fixed order
//! the engine evaluates them in — fixed so that, across two runs with
//! the same config and store state, the `Warn` aggregation always
//! lists violations in the same order.

mod fix_regressions_first;
mod no_commit_failing;
mod no_edit_unread;
mod no_pointless_rerun;
mod no_thrashing;
mod scope_check;
mod test_after_edits;

pub use fix_regressions_first::FixRegressionsFirst;
pub use no_commit_failing::NoCommitFailing;
pub use no_edit_unread::NoEditUnread;
pub use no_pointless_rerun::NoPointlessRerun;
pub use no_thrashing::NoThrashing;
pub use scope_check::ScopeCheck;
pub use test_after_edits::TestAfterEdits;

use crate::rule::Rule;

pub fn all() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoEditUnread),
        Box::new(TestAfterEdits),
        Box::new(FixRegressionsFirst),
        Box::new(NoThrashing),
        Box::new(NoCommitFailing),
        Box::new(NoPointlessRerun),
        Box::new(ScopeCheck),
    ]
}
