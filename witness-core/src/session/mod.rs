//! Session identity: a logical run of the host agent.
//!
//! The session id is process-wide state: resolved once per invocation
//! and threaded explicitly thereafter. It is never stashed in
//! ambient/global storage.

use std::fmt;

/// An opaque session identifier. All facts are scoped to one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The literal fallback session id when nothing else supplies one.
    pub fn default_session() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Resolve a session id by precedence: explicit-arg → environment
/// variable → input payload field → literal `"default"`.
///
/// A standalone pure function so the precedence can be unit-tested
/// independently of the I/O (stdin parsing, env lookup) that surrounds
/// it in the pre/post binaries.
pub fn resolve_session_id(
    explicit_arg: Option<&str>,
    env_var: Option<&str>,
    input_field: Option<&str>,
) -> SessionId {
    explicit_arg
        .filter(|s| !s.is_empty())
        .or(env_var.filter(|s| !s.is_empty()))
        .or(input_field.filter(|s| !s.is_empty()))
        .map(SessionId::from)
        .unwrap_or_else(SessionId::default_session)
}
