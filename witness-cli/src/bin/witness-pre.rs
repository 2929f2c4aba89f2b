//! The pre-pipeline: reads a hook payload from standard input, runs
//! the rule engine against the fact store, and writes the decision
//! payload to standard output. Always exits 0 — see spec §7.

use witness_core::hook::HookInput;

fn main() {
    witness_core::tracing_init::init();

    let Ok(raw) = witness_cli::read_stdin() else {
        return;
    };
    let Ok(input) = HookInput::parse(&raw) else {
        tracing::debug!("pre-pipeline: unparseable input, allowing silently");
        return;
    };

    let cwd = std::env::current_dir().unwrap_or_default();
    let session = witness_cli::resolve_session(&input);
    let config = witness_cli::load_config(&cwd);

    let Some(store) = witness_cli::open_store(&cwd) else {
        return;
    };

    let decision = witness_rules::evaluate(&input, &session, &store, &config);
    if let Some(payload) = decision.render() {
        println!("{payload}");
    }
}
