//! # witness-core
//!
//! Foundation crate for the Witness behavioral-lint engine.
//! Defines the fact model, the error taxonomy, hook-facing types,
//! rule configuration, and tracing bootstrap. Every other crate in
//! the workspace depends on it.

pub mod config;
pub mod errors;
pub mod facts;
pub mod hook;
pub mod session;
pub mod tracing_init;

pub use config::{RuleAction, RuleOptions, RuleSetting, WitnessConfig};
pub use errors::{ConfigError, FatalDefect, ParseError, StoreError, WitnessErrorCode};
pub use facts::{Fact, FileEventKind, HookEventKind, LintSeverity, TestOutcome};
pub use hook::{HookDecision, HookInput};
pub use session::{resolve_session_id, SessionId};
