//! The post-pipeline: reads the same hook payload (now carrying the
//! tool's output), records the raw tool call, routes it through the
//! parsers, and appends every resulting fact to the store. No
//! standard output on success; always exits 0 — see spec §7.

use witness_core::facts::{Fact, HookEventKind, ToolCallFact};
use witness_core::hook::HookInput;
use witness_store::facts::{insert_fact, insert_hook_event};

fn main() {
    witness_core::tracing_init::init();

    let Ok(raw) = witness_cli::read_stdin() else {
        return;
    };
    let Ok(input) = HookInput::parse(&raw) else {
        tracing::debug!("post-pipeline: unparseable input, recording nothing");
        return;
    };

    let cwd = std::env::current_dir().unwrap_or_default();
    let session = witness_cli::resolve_session(&input);

    let Some(store) = witness_cli::open_store(&cwd) else {
        return;
    };

    let tool_call = Fact::ToolCall(ToolCallFact {
        tool_name: input.tool_name.clone(),
        tool_input: input.tool_input.to_string(),
        tool_output: input.tool_output.clone(),
    });
    if let Err(e) = insert_fact(&store, &session, &tool_call) {
        tracing::debug!(error = %e, "failed to record raw tool call");
    }

    let facts = witness_parsers::route(&input);
    let fact_count = facts.len();
    for fact in &facts {
        if let Err(e) = insert_fact(&store, &session, fact) {
            tracing::debug!(error = %e, kind = fact.kind_name(), "failed to record parsed fact");
        }
    }

    if let Err(e) = insert_hook_event(
        &store,
        &session,
        HookEventKind::Record,
        Some(&input.tool_name),
        "record",
        None,
        None,
        Some(&fact_count.to_string()),
    ) {
        tracing::debug!(error = %e, "failed to log hook event");
    }
}
