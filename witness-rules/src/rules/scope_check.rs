use std::collections::HashSet;

use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::{blast_radius, raw};

use crate::rule::{Rule, RuleContext};

pub struct ScopeCheck;

impl Rule for ScopeCheck {
    fn name(&self) -> &'static str {
        "scope_check"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_edit_or_create_tool(&input.tool_name) && input.file_path().is_some()
    }

    fn check(&self, input: &HookInput, ctx: &RuleContext, _options: &RuleOptions) -> Option<String> {
        let path = input.file_path()?;

        let reads = raw::read_events(ctx.store, ctx.session).ok()?;
        if reads.iter().any(|r| r.file_path == path) {
            return None;
        }

        let edits = raw::edit_events(ctx.store, ctx.session).ok()?;
        if edits.iter().any(|e| e.file_path == path) {
            return None;
        }

        let already_edited: HashSet<String> = edits.into_iter().map(|e| e.file_path).collect();
        for edited in &already_edited {
            let radius = blast_radius(ctx.store, ctx.session, edited).ok()?;
            if radius.iter().any(|r| r.module == path) {
                return None;
            }
        }

        Some(format!(
            "{path} is outside the blast radius of current edits and has not been read this session."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use witness_core::facts::{Fact, FileEventFact, FileEventKind, ImportFact};
    use witness_core::SessionId;
    use witness_store::Store;

    fn input(path: &str) -> HookInput {
        let payload = json!({ "tool_name": "Edit", "tool_input": { "path": path } });
        HookInput::parse(&payload.to_string()).unwrap()
    }

    #[test]
    fn fires_on_unrelated_unread_file() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::FileEvent(FileEventFact { event: FileEventKind::Edit, file_path: "src/a.ts".to_string() }),
        )
        .unwrap();

        let ctx = RuleContext { store: &store, session: &session };
        let rule = ScopeCheck;
        let message = rule.check(&input("src/unrelated.ts"), &ctx, &RuleOptions::empty()).unwrap();
        assert!(message.contains("src/unrelated.ts"));
    }

    #[test]
    fn silent_when_within_blast_radius() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::Import(ImportFact { source_file: "src/consumer.ts".to_string(), imported_module: "src/shared.ts".to_string() }),
        )
        .unwrap();
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::FileEvent(FileEventFact { event: FileEventKind::Edit, file_path: "src/shared.ts".to_string() }),
        )
        .unwrap();

        let ctx = RuleContext { store: &store, session: &session };
        let rule = ScopeCheck;
        assert!(rule.check(&input("src/consumer.ts"), &ctx, &RuleOptions::empty()).is_none());
    }

    #[test]
    fn silent_when_already_read() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        witness_store::facts::insert_fact(
            &store,
            &session,
            &Fact::FileEvent(FileEventFact { event: FileEventKind::Read, file_path: "src/b.ts".to_string() }),
        )
        .unwrap();

        let ctx = RuleContext { store: &store, session: &session };
        let rule = ScopeCheck;
        assert!(rule.check(&input("src/b.ts"), &ctx, &RuleOptions::empty()).is_none());
    }
}
