use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_store::views::raw;

use crate::rule::{Rule, RuleContext};

pub struct NoEditUnread;

impl Rule for NoEditUnread {
    fn name(&self) -> &'static str {
        "no_edit_unread"
    }

    fn applies(&self, input: &HookInput) -> bool {
        witness_parsers::is_edit_or_create_tool(&input.tool_name) && input.file_path().is_some()
    }

    fn check(&self, input: &HookInput, ctx: &RuleContext, _options: &RuleOptions) -> Option<String> {
        let path = input.file_path()?;
        let reads = raw::read_events(ctx.store, ctx.session).ok()?;
        let already_read = reads.iter().any(|r| r.file_path == path);
        if already_read {
            return None;
        }
        Some(format!(
            "{path} has not been read this session. Read it first before editing."
        ))
    }
}
