//! Stable, machine-readable error codes, mirrored after the teacher's
//! `DriftErrorCode` — used only for the optional stderr debug line;
//! never surfaced to the host agent's stdout or exit code.

use super::{ConfigError, FatalDefect, ParseError, StoreError};

pub const PARSE_INVALID_JSON: &str = "parse.invalid_json";
pub const PARSE_MISSING_FIELD: &str = "parse.missing_field";
pub const PARSE_UNRECOGNIZED_TOOL: &str = "parse.unrecognized_tool";
pub const STORE_SQLITE: &str = "store.sqlite";
pub const STORE_MIGRATION: &str = "store.migration";
pub const STORE_IO: &str = "store.io";
pub const STORE_NOT_FOUND: &str = "store.not_found";
pub const CONFIG_IO: &str = "config.io";
pub const CONFIG_PARSE: &str = "config.parse";
pub const FATAL_UNREACHABLE: &str = "fatal.unreachable";
pub const FATAL_INVARIANT: &str = "fatal.invariant";

/// A stable code identifying the kind of failure, independent of the
/// human-readable message carried alongside it.
pub trait WitnessErrorCode {
    fn error_code(&self) -> &'static str;
}

impl WitnessErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => PARSE_INVALID_JSON,
            Self::MissingField(_) => PARSE_MISSING_FIELD,
            Self::UnrecognizedTool(_) => PARSE_UNRECOGNIZED_TOOL,
        }
    }
}

impl WitnessErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Sqlite { .. } => STORE_SQLITE,
            Self::Migration { .. } => STORE_MIGRATION,
            Self::Io { .. } => STORE_IO,
            Self::NotFound => STORE_NOT_FOUND,
        }
    }
}

impl WitnessErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => CONFIG_IO,
            Self::Parse { .. } => CONFIG_PARSE,
        }
    }
}

impl WitnessErrorCode for FatalDefect {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => FATAL_UNREACHABLE,
            Self::InvariantViolated(_) => FATAL_INVARIANT,
        }
    }
}
