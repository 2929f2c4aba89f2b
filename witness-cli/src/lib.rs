//! Shared plumbing for the `witness-pre` and `witness-post` binaries:
//! reading the hook payload from standard input, resolving the store
//! path and session id from the environment, and opening the store.
//!
//! Argument parsing, `--help`/`--version`, and any `witness <verb>`
//! subcommand surface are out of scope here — these binaries exist
//! only to make the pre/post pipeline callable end to end.

use std::io::Read;
use std::path::{Path, PathBuf};

use witness_core::config::WitnessConfig;
use witness_core::hook::HookInput;
use witness_core::session::{resolve_session_id, SessionId};
use witness_store::Store;

const DB_ENV: &str = "WITNESS_DB";
const SESSION_ENV: &str = "WITNESS_SESSION";
const DEFAULT_DB_PATH: &str = ".witness/witness.db";

/// Read the entire pipeline payload from standard input.
pub fn read_stdin() -> std::io::Result<String> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

/// Resolve the store path: `WITNESS_DB`, or `.witness/witness.db`
/// relative to `cwd`.
pub fn resolve_db_path(cwd: &Path) -> PathBuf {
    match std::env::var(DB_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => cwd.join(DEFAULT_DB_PATH),
    }
}

/// Resolve the session id for this invocation: `WITNESS_SESSION`, then
/// the input payload's own `session_id` field, then `"default"`.
pub fn resolve_session(input: &HookInput) -> SessionId {
    let env_session = std::env::var(SESSION_ENV).ok();
    resolve_session_id(
        None,
        env_session.as_deref(),
        input.session_id.as_deref(),
    )
}

/// Open the store at the resolved path, logging and returning `None`
/// on failure rather than propagating — a broken store degrades the
/// whole invocation to a no-op, never a crash.
pub fn open_store(cwd: &Path) -> Option<Store> {
    let path = resolve_db_path(cwd);
    match Store::open(&path) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::debug!(error = %e, path = %path.display(), "failed to open store");
            None
        }
    }
}

/// Load `.witness.json` from `cwd`, falling back to an empty config on
/// any read or parse failure.
pub fn load_config(cwd: &Path) -> WitnessConfig {
    WitnessConfig::load_or_default(cwd)
}
