//! The external hook interface: the JSON shape both
//! pipelines read from standard input, and the decision payload the
//! pre-pipeline writes to standard output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON object read from standard input by both pipelines.
/// Unknown fields are ignored (`serde(default)` on every field, no
/// `deny_unknown_fields`).
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    pub tool_name: String,
    #[serde(default)]
    pub hook: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub tool_input: Value,
    #[serde(default)]
    pub tool_output: Option<String>,
    #[serde(default)]
    pub tool_exit_code: Option<i64>,
}

impl HookInput {
    /// Parse the pipeline's stdin payload. The only field that must be
    /// present is `tool_name`; anything else missing degrades to its
    /// default rather than erroring.
    pub fn parse(raw: &str) -> Result<Self, crate::errors::ParseError> {
        if raw.trim().is_empty() {
            return Err(crate::errors::ParseError::InvalidJson(
                "empty input".to_string(),
            ));
        }
        serde_json::from_str(raw).map_err(|e| crate::errors::ParseError::InvalidJson(e.to_string()))
    }

    /// Look up a string value in `tool_input` by key, returning `None`
    /// for a missing, non-string, or empty value.
    pub fn input_str(&self, key: &str) -> Option<&str> {
        self.tool_input
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The shell command for Bash-like tools, tried under `command`
    /// then `cmd`.
    pub fn command(&self) -> Option<&str> {
        self.input_str("command").or_else(|| self.input_str("cmd"))
    }

    /// The file path for file-manipulation tools, tried under each of
    /// these keys in turn.
    pub fn file_path(&self) -> Option<&str> {
        ["path", "file_path", "file", "filename"]
            .iter()
            .find_map(|key| self.input_str(key))
    }
}

/// The pre-pipeline's decision. `Allow` prints nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookDecision {
    Allow,
    Warn { messages: Vec<WarnEntry> },
    Block { rule_name: String, message: String },
}

/// One rule's warning, kept paired with its rule name so the
/// aggregated `additionalContext` can prefix each line correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarnEntry {
    pub rule_name: String,
    pub message: String,
}

impl HookDecision {
    /// Render the stdout payload for this decision, or `None` for
    /// `Allow` (which prints nothing).
    pub fn render(&self) -> Option<String> {
        match self {
            HookDecision::Allow => None,
            HookDecision::Warn { messages } => {
                let joined = messages
                    .iter()
                    .map(|w| format!("[witness] \u{26a0}\u{fe0f} {}: {}", w.rule_name, w.message))
                    .collect::<Vec<_>>()
                    .join("\n");
                let payload = WarnPayload {
                    decision: "approve",
                    additional_context: joined,
                };
                serde_json::to_string(&payload).ok()
            }
            HookDecision::Block { rule_name, message } => {
                let reason = format!("[witness] \u{1f6d1} {rule_name}: {message}");
                let payload = BlockPayload {
                    hook_specific_output: BlockInner {
                        hook_event_name: "PreToolUse",
                        permission_decision: "deny",
                        permission_decision_reason: reason,
                    },
                };
                serde_json::to_string(&payload).ok()
            }
        }
    }
}

#[derive(Serialize)]
struct WarnPayload {
    decision: &'static str,
    #[serde(rename = "additionalContext")]
    additional_context: String,
}

#[derive(Serialize)]
struct BlockPayload {
    #[serde(rename = "hookSpecificOutput")]
    hook_specific_output: BlockInner,
}

#[derive(Serialize)]
struct BlockInner {
    #[serde(rename = "hookEventName")]
    hook_event_name: &'static str,
    #[serde(rename = "permissionDecision")]
    permission_decision: &'static str,
    #[serde(rename = "permissionDecisionReason")]
    permission_decision_reason: String,
}
