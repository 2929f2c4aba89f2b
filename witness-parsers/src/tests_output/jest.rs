//! jest / vitest-compatible structured report, plus jest's checkmark
//! text output.

use serde_json::Value;
use witness_core::facts::{Fact, TestOutcome};

use super::{fact, looks_structured, truncate};

pub fn parse(output: &str) -> Vec<Fact> {
    if looks_structured(output) {
        if let Ok(value) = serde_json::from_str::<Value>(output) {
            let structured = parse_structured(&value);
            if !structured.is_empty() {
                return structured;
            }
        }
    }
    parse_text(output)
}

fn parse_structured(value: &Value) -> Vec<Fact> {
    let Some(suites) = value.get("testResults").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut facts = Vec::new();
    for suite in suites {
        let Some(assertions) = suite.get("assertionResults").and_then(Value::as_array) else {
            continue;
        };
        for assertion in assertions {
            let name = assertion
                .get("fullName")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    let ancestors: Vec<&str> = assertion
                        .get("ancestorTitles")
                        .and_then(Value::as_array)
                        .map(|a| a.iter().filter_map(Value::as_str).collect())
                        .unwrap_or_default();
                    let title = assertion.get("title").and_then(Value::as_str).unwrap_or("");
                    let mut parts = ancestors;
                    parts.push(title);
                    parts.join(" > ")
                });

            let status = assertion.get("status").and_then(Value::as_str).unwrap_or("");
            let Some(outcome) = map_status(status) else {
                continue;
            };

            let message = if outcome == TestOutcome::Fail {
                assertion
                    .get("failureMessages")
                    .and_then(Value::as_array)
                    .and_then(|m| m.first())
                    .and_then(Value::as_str)
                    .map(|m| truncate(m, 500))
            } else {
                None
            };

            facts.push(fact(name, outcome, message));
        }
    }
    facts
}

fn map_status(status: &str) -> Option<TestOutcome> {
    match status {
        "passed" => Some(TestOutcome::Pass),
        "failed" => Some(TestOutcome::Fail),
        "pending" | "skipped" | "todo" => Some(TestOutcome::Skip),
        _ => None,
    }
}

fn parse_text(output: &str) -> Vec<Fact> {
    let mut facts = Vec::new();
    let lines: Vec<&str> = output.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        let (outcome, rest) = if let Some(rest) = strip_any(trimmed, &["\u{2713}", "\u{2714}"]) {
            (TestOutcome::Pass, rest)
        } else if let Some(rest) = strip_any(trimmed, &["\u{2717}", "\u{2718}", "\u{d7}"]) {
            (TestOutcome::Fail, rest)
        } else if let Some(rest) = strip_any(trimmed, &["\u{25cb}", "\u{25ce}", "\u{2298}"]) {
            (TestOutcome::Skip, rest)
        } else {
            continue;
        };

        let name = rest.trim().to_string();
        if name.is_empty() {
            continue;
        }

        let message = if outcome == TestOutcome::Fail {
            lines
                .get(i + 1)
                .map(|l| l.trim())
                .filter(|l| l.starts_with('\u{2192}'))
                .map(|l| truncate(l.trim_start_matches('\u{2192}').trim(), 500))
        } else {
            None
        };

        facts.push(fact(name, outcome, message));
    }
    facts
}

fn strip_any<'a>(s: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers.iter().find_map(|m| s.strip_prefix(m))
}
