use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::edits_since_last_test;

use crate::rule::{Rule, RuleContext};

const DEFAULT_THRESHOLD: u32 = 3;

pub struct TestAfterEdits;

impl Rule for TestAfterEdits {
    fn name(&self) -> &'static str {
        "test_after_edits"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_edit_or_create_tool(&input.tool_name)
    }

    fn check(&self, _input: &HookInput, ctx: &RuleContext, options: &RuleOptions) -> Option<String> {
        let threshold = options.u32_or("threshold", DEFAULT_THRESHOLD);
        let count = edits_since_last_test(ctx.store, ctx.session).ok()??;
        if count < threshold {
            return None;
        }
        Some(format!("{count} edits since last test run. Run tests before continuing."))
    }
}
