use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::{edits_since_last_test, raw};

use crate::rule::{Rule, RuleContext};

pub struct NoPointlessRerun;

impl Rule for NoPointlessRerun {
    fn name(&self) -> &'static str {
        "no_pointless_rerun"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_shell_tool(&input.tool_name)
            && input
                .command()
                .map(witness_parsers::commands::is_test_runner_command)
                .unwrap_or(false)
    }

    fn check(&self, _input: &HookInput, ctx: &RuleContext, _options: &RuleOptions) -> Option<String> {
        let has_prior_run = !raw::all_test_results(ctx.store, ctx.session).ok()?.is_empty();
        if !has_prior_run {
            return None;
        }
        // A `None` here means zero edits since the last test run
        // (vacuous "no edits ever" also counts, but that case already
        // fails `has_prior_run` above since no test has run either).
        if edits_since_last_test(ctx.store, ctx.session).ok()?.is_some() {
            return None;
        }
        Some("No edits since last test run. Change something before rerunning tests.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use witness_core::facts::{Fact, FileEventFact, FileEventKind, TestOutcome, TestResultFact};
    use witness_core::SessionId;
    use witness_store::Store;

    fn input(command: &str) -> HookInput {
        let payload = json!({ "tool_name": "Bash", "tool_input": { "command": command } });
        HookInput::parse(&payload.to_string()).unwrap()
    }

    #[test]
    fn fires_when_rerunning_with_no_intervening_edits() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::TestResult(TestResultFact { test_name: "t".to_string(), outcome: TestOutcome::Pass, message: None }),
        )
        .unwrap();

        let ctx = RuleContext { store: &store, session: &session };
        let rule = NoPointlessRerun;
        let inp = input("npm test");
        assert!(rule.applies(&inp));
        assert!(rule.check(&inp, &ctx, &RuleOptions::empty()).is_some());
    }

    #[test]
    fn silent_when_an_edit_happened_since() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::TestResult(TestResultFact { test_name: "t".to_string(), outcome: TestOutcome::Pass, message: None }),
        )
        .unwrap();
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::FileEvent(FileEventFact { event: FileEventKind::Edit, file_path: "a.ts".to_string() }),
        )
        .unwrap();

        let ctx = RuleContext { store: &store, session: &session };
        let rule = NoPointlessRerun;
        assert!(rule.check(&input("npm test"), &ctx, &RuleOptions::empty()).is_none());
    }

    #[test]
    fn silent_when_no_tests_have_ever_run() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let ctx = RuleContext { store: &store, session: &session };
        let rule = NoPointlessRerun;
        assert!(rule.check(&input("npm test"), &ctx, &RuleOptions::empty()).is_none());
    }
}
