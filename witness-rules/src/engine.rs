//! The pre-pipeline's evaluation algorithm (spec §4.6): iterate rules
//! in a fixed order, skip the ones that don't apply or are configured
//! off, collect every firing rule's message, then resolve Allow / Warn
//! / Block with block taking strict precedence over warn.

use tracing::debug;

use witness_core::config::{RuleAction, WitnessConfig};
use witness_core::facts::HookEventKind;
use witness_core::hook::{HookDecision, HookInput, WarnEntry};
use witness_core::SessionId;
use witness_store::Store;

use crate::rule::RuleContext;
use crate::rules;

struct Violation {
    rule_name: &'static str,
    action: RuleAction,
    message: String,
}

/// Run every rule against `input`, aggregate the result into a
/// decision, and log the aggregated hook event. A rule whose `check`
/// hits a store error is treated as silent (`None`) — never
/// propagated, per the error policy in spec §7.
pub fn evaluate(
    input: &HookInput,
    session: &SessionId,
    store: &Store,
    config: &WitnessConfig,
) -> HookDecision {
    let ctx = RuleContext { store, session };
    let mut violations = Vec::new();

    for rule in rules::all() {
        if !rule.applies(input) {
            continue;
        }
        let setting = config.setting_for(rule.name());
        if setting.action == RuleAction::Off {
            continue;
        }
        if let Some(message) = rule.check(input, &ctx, &setting.options) {
            violations.push(Violation {
                rule_name: rule.name(),
                action: setting.action,
                message,
            });
        }
    }

    let decision = resolve(violations);
    log_decision(store, session, input, &decision);
    decision
}

fn resolve(violations: Vec<Violation>) -> HookDecision {
    if let Some(blocking) = violations.iter().find(|v| v.action == RuleAction::Block) {
        return HookDecision::Block {
            rule_name: blocking.rule_name.to_string(),
            message: blocking.message.clone(),
        };
    }
    if violations.is_empty() {
        return HookDecision::Allow;
    }
    HookDecision::Warn {
        messages: violations
            .into_iter()
            .map(|v| WarnEntry { rule_name: v.rule_name.to_string(), message: v.message })
            .collect(),
    }
}

fn log_decision(store: &Store, session: &SessionId, input: &HookInput, decision: &HookDecision) {
    let (action, message) = match decision {
        HookDecision::Allow => ("allow", None),
        HookDecision::Warn { messages } => (
            "warn",
            Some(messages.iter().map(|w| w.message.as_str()).collect::<Vec<_>>().join("\n")),
        ),
        HookDecision::Block { message, .. } => ("block", Some(message.clone())),
    };
    if let Err(e) = witness_store::facts::insert_hook_event(
        store,
        session,
        HookEventKind::Lint,
        Some(&input.tool_name),
        action,
        message.as_deref(),
        None,
        None,
    ) {
        debug!(error = %e, "failed to log hook event; decision still returned to caller");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use witness_core::config::WitnessConfig;

    fn config_from_json(raw: &str) -> WitnessConfig {
        let dir = std::env::temp_dir().join(format!(
            "witness-engine-test-{}-{}",
            std::process::id(),
            raw.len()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(".witness.json"), raw).unwrap();
        WitnessConfig::load_or_default(&dir)
    }

    fn config(rule: &str, action: &str) -> WitnessConfig {
        config_from_json(&format!(r#"{{"rules":{{"{rule}":"{action}"}}}}"#))
    }

    fn input(tool_name: &str, path: &str) -> HookInput {
        let payload = json!({ "tool_name": tool_name, "tool_input": { "path": path } });
        HookInput::parse(&payload.to_string()).unwrap()
    }

    #[test]
    fn scenario_s1_unread_edit_warns() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let config = config("no_edit_unread", "warn");
        let decision = evaluate(&input("Edit", "src/auth.ts"), &session, &store, &config);
        match decision {
            HookDecision::Warn { messages } => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].rule_name, "no_edit_unread");
                assert!(messages[0].message.contains("src/auth.ts"));
            }
            other => panic!("expected Warn, got {other:?}"),
        }
    }

    #[test]
    fn scenario_s2_unread_edit_blocks_when_configured() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let config = config("no_edit_unread", "block");
        let decision = evaluate(&input("Edit", "src/auth.ts"), &session, &store, &config);
        match decision {
            HookDecision::Block { rule_name, message } => {
                assert_eq!(rule_name, "no_edit_unread");
                assert!(message.contains("src/auth.ts"));
            }
            other => panic!("expected Block, got {other:?}"),
        }
    }

    #[test]
    fn allow_when_nothing_configured() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let config = WitnessConfig::empty();
        let decision = evaluate(&input("Edit", "src/auth.ts"), &session, &store, &config);
        assert_eq!(decision, HookDecision::Allow);
    }

    #[test]
    fn block_takes_precedence_over_warn() {
        let store = Store::open_in_memory().unwrap();
        let session = SessionId::from("s1");
        let config = config_from_json(
            r#"{"rules":{"no_edit_unread":"warn","scope_check":"block"}}"#,
        );
        let decision = evaluate(&input("Edit", "src/auth.ts"), &session, &store, &config);
        assert!(matches!(decision, HookDecision::Block { .. }));
    }
}
