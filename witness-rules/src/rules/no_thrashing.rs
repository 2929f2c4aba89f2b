use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::thrashing;

use crate::rule::{Rule, RuleContext};

const DEFAULT_THRESHOLD: u32 = 3;

pub struct NoThrashing;

impl Rule for NoThrashing {
    fn name(&self) -> &'static str {
        "no_thrashing"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_edit_or_create_tool(&input.tool_name) && input.file_path().is_some()
    }

    fn check(&self, input: &HookInput, ctx: &RuleContext, options: &RuleOptions) -> Option<String> {
        let path = input.file_path()?;
        let threshold = options.u32_or("threshold", DEFAULT_THRESHOLD);
        let rows = thrashing(ctx.store, ctx.session).ok()?;
        let entry = rows.iter().find(|r| r.file_path == path)?;
        if entry.edit_count < threshold {
            return None;
        }
        Some(format!(
            "{path} has been edited {} times with failures persisting. Stop editing this file and reconsider the approach.",
            entry.edit_count
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use witness_core::facts::{Fact, FileEventFact, FileEventKind, TestOutcome, TestResultFact};
    use witness_core::SessionId;
    use witness_store::Store;

    fn input(path: &str) -> HookInput {
        let payload = json!({ "tool_name": "Edit", "tool_input": { "path": path } });
        HookInput::parse(&payload.to_string()).unwrap()
    }

    fn seed_cycle(store: &Store, session: &SessionId, path: &str) {
        witness_store::facts::insert_fact(
            store,
            session,
            &Fact::FileEvent(FileEventFact { event: FileEventKind::Edit, file_path: path.to_string() }),
        )
        .unwrap();
        witness_store::facts::insert_fact(
            store,
            session,
            &Fact::TestResult(TestResultFact { test_name: "test_auth".to_string(), outcome: TestOutcome::Fail, message: None }),
        )
        .unwrap();
    }

    #[test]
    fn scenario_s6_blocks_on_third_edit() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        for _ in 0..3 {
            seed_cycle(&store, &session, "src/auth.ts");
        }
        let ctx = RuleContext { store: &store, session: &session };
        let rule = NoThrashing;
        let message = rule.check(&input("src/auth.ts"), &ctx, &RuleOptions::empty()).unwrap();
        assert!(message.contains("src/auth.ts"));
        assert!(message.contains('3'));
    }

    #[test]
    fn a_different_file_in_the_same_state_is_silent() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        for _ in 0..3 {
            seed_cycle(&store, &session, "src/auth.ts");
        }
        let ctx = RuleContext { store: &store, session: &session };
        let rule = NoThrashing;
        assert!(rule.check(&input("src/other.ts"), &ctx, &RuleOptions::empty()).is_none());
    }
}
