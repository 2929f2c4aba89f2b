//! Test-runner output parsers. Each accepts raw tool output and
//! returns zero or more `TestResult` facts; malformed or empty output
//! yields an empty sequence, never an error.

pub mod bun_test;
pub mod go_test;
pub mod jest;
pub mod pytest;
pub mod vitest;

use witness_core::facts::{Fact, TestOutcome, TestResultFact};

fn fact(test_name: String, outcome: TestOutcome, message: Option<String>) -> Fact {
    Fact::TestResult(TestResultFact {
        test_name,
        outcome,
        message: message.map(|m| truncate(&m, 500)),
    })
}

fn truncate(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

/// Looks like the start of a JSON document.
fn looks_structured(output: &str) -> bool {
    matches!(output.trim_start().chars().next(), Some('{') | Some('['))
}
