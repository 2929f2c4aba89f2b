//! The `Rule` trait: a pure `applies` predicate over the pending tool
//! call, plus an effectful `check` that queries the store's views.
//!
//! `check` can never raise across the engine boundary — a rule that
//! hits a `StoreError` returns `None` rather than propagating it, so a
//! broken view degrades to "no opinion", never a false block.

use witness_core::config::RuleOptions;
use witness_core::hook::HookInput;
use witness_core::SessionId;
use witness_store::Store;

/// The store handle and session a rule's `check` is scoped to.
pub struct RuleContext<'a> {
    pub store: &'a Store,
    pub session: &'a SessionId,
}

pub trait Rule {
    /// A stable identifier, also the key rule configuration is looked
    /// up by (e.g. `no_thrashing`).
    fn name(&self) -> &'static str;

    /// Pure and fast: never touches the store. Decides whether this
    /// rule has any opinion at all about the pending tool call.
    fn applies(&self, input: &HookInput) -> bool;

    /// Query the views this rule needs and decide whether it fires.
    /// `Some(message)` is a violation; `None` is silence.
    fn check(&self, input: &HookInput, ctx: &RuleContext, options: &RuleOptions) -> Option<String>;
}
