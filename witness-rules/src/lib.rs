//! The seven-rule lint engine: rule trait, rule configuration lookup,
//! and the violation-aggregation algorithm that turns a set of firing
//! rules into a single `HookDecision`.

pub mod engine;
pub mod rule;
pub mod rules;

pub use engine::evaluate;
pub use rule::{Rule, RuleContext};
