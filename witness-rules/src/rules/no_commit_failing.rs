use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::failing_tests;

use crate::rule::{Rule, RuleContext};

pub struct NoCommitFailing;

impl Rule for NoCommitFailing {
    fn name(&self) -> &'static str {
        "no_commit_failing"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_shell_tool(&input.tool_name)
            && input
                .command()
                .map(witness_parsers::commands::is_commit_command)
                .unwrap_or(false)
    }

    fn check(&self, _input: &HookInput, ctx: &RuleContext, _options: &RuleOptions) -> Option<String> {
        let failing = failing_tests(ctx.store, ctx.session).ok()?;
        if failing.is_empty() {
            return None;
        }
        let n = failing.len();
        let names = failing
            .iter()
            .map(|t| t.test_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let noun = if n == 1 { "test" } else { "tests" };
        Some(format!(
            "{n} {noun} currently failing ({names}). Fix tests before committing."
        ))
    }
}
