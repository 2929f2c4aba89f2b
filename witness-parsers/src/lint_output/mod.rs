//! Lint-output parsers. Each accepts raw tool output and returns zero
//! or more `LintResult` facts; malformed or empty output yields an
//! empty sequence, never an error.

pub mod biome;
pub mod eslint;
pub mod flake8;

use witness_core::facts::{Fact, LintResultFact, LintSeverity};

fn fact(file_path: String, line: Option<u32>, rule: String, severity: LintSeverity) -> Fact {
    Fact::LintResult(LintResultFact {
        file_path,
        line,
        rule,
        severity,
    })
}

/// Looks like the start of a JSON document.
fn looks_structured(output: &str) -> bool {
    matches!(output.trim_start().chars().next(), Some('{') | Some('['))
}
