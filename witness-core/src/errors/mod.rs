//! The error taxonomy.
//!
//! None of these ever reach the host agent: the pre- and post-pipelines
//! always exit 0. Each carrier exists so the engine can log a debug
//! line and degrade locally instead of propagating a panic or a
//! non-zero exit code.

mod error_code;

pub use error_code::WitnessErrorCode;

/// Malformed input JSON, a missing required field, or a parser's own
/// internal failure. Local recovery: treat as a no-op, continue with
/// an empty fact set.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unrecognized tool `{0}`")]
    UnrecognizedTool(String),
}

/// Any I/O or query failure against the fact store. Local recovery:
/// the triggering rule yields no violation, the triggering fact is
/// dropped, the pipeline completes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {message}")]
    Sqlite { message: String },

    #[error("schema migration failed: {message}")]
    Migration { message: String },

    #[error("could not create store directory {path}: {message}")]
    Io { path: String, message: String },

    #[error("row not found")]
    NotFound,
}

/// Unreadable or malformed `.witness.json`. Local recovery: fall back
/// to defaults — a missing configuration file behaves identically.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("could not parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Programmer error detectable only at runtime (an exhaustive match
/// that should have been total, an invariant the caller already
/// believed held). Logged as a debug line; the pipeline still exits 0.
#[derive(Debug, thiserror::Error)]
pub enum FatalDefect {
    #[error("unreachable state: {0}")]
    Unreachable(String),

    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

impl From<StoreError> for FatalDefect {
    fn from(e: StoreError) -> Self {
        FatalDefect::InvariantViolated(e.to_string())
    }
}
