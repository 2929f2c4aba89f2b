//! Rule configuration.
//!
//! `.witness.json` is optional; when absent, unreadable, or
//! unparseable it behaves exactly like an empty config — a
//! `ConfigError` always falls back to defaults rather than aborting.
//! Every rule defaults to `off` unless explicitly enabled by the host
//! config.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConfigError;

/// What a firing rule should do to the pre-pipeline decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Off,
    Warn,
    Block,
}

impl Default for RuleAction {
    fn default() -> Self {
        RuleAction::Off
    }
}

impl RuleAction {
    /// Parse an action string, falling back to `Off` for anything
    /// unrecognized rather than erroring: unknown rule names are
    /// ignored, not rejected.
    fn from_str_lenient(s: &str) -> Self {
        match s {
            "warn" => RuleAction::Warn,
            "block" => RuleAction::Block,
            _ => RuleAction::Off,
        }
    }
}

/// A per-rule options bag (e.g. `threshold`), kept as a generic JSON
/// object since each rule defines its own option names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOptions(HashMap<String, Value>);

impl RuleOptions {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Read an integer-valued option, or `default` if absent or not
    /// an integer.
    pub fn u32_or(&self, key: &str, default: u32) -> u32 {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }
}

/// One rule's configured action plus its options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSetting {
    pub action: RuleAction,
    pub options: RuleOptions,
}

/// The raw shape a rule's config value can take in JSON: either a bare
/// action string, or a `[action, options]` pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuleSetting {
    Bare(String),
    WithOptions(String, HashMap<String, Value>),
}

impl From<RawRuleSetting> for RuleSetting {
    fn from(raw: RawRuleSetting) -> Self {
        match raw {
            RawRuleSetting::Bare(action) => RuleSetting {
                action: RuleAction::from_str_lenient(&action),
                options: RuleOptions::empty(),
            },
            RawRuleSetting::WithOptions(action, options) => RuleSetting {
                action: RuleAction::from_str_lenient(&action),
                options: RuleOptions(options),
            },
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    rules: HashMap<String, RawRuleSetting>,
}

/// The parsed `.witness.json` document: a map from rule name to its
/// configured action and options. Rule lookup uses `Off` with empty
/// options for any name not present.
#[derive(Debug, Clone, Default)]
pub struct WitnessConfig {
    rules: HashMap<String, RuleSetting>,
}

impl WitnessConfig {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Load `.witness.json` from `dir`. A missing file is treated as
    /// an empty config, not an error — `ConfigError` is only surfaced
    /// for an existing-but-unreadable/unparseable file, and even then
    /// callers should fall back to defaults rather than propagate it.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(".witness.json");
        if !path.exists() {
            return Ok(Self::empty());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e,
        })
    }

    fn parse(raw: &str) -> Result<Self, String> {
        let parsed: RawConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        let rules = parsed
            .rules
            .into_iter()
            .map(|(name, raw_setting)| (name, RuleSetting::from(raw_setting)))
            .collect();
        Ok(Self { rules })
    }

    /// Like `load`, but never returns an error — an unreadable or
    /// malformed file degrades to an empty config.
    pub fn load_or_default(dir: &Path) -> Self {
        Self::load(dir).unwrap_or_else(|_| Self::empty())
    }

    /// The configured setting for a rule, or `Off`/empty-options if
    /// unconfigured.
    pub fn setting_for(&self, rule_name: &str) -> RuleSetting {
        self.rules.get(rule_name).cloned().unwrap_or_default()
    }
}
