//! pytest: a structured `{"tests": [...]}` report when present,
//! otherwise a two-pass text parse over `pytest -v`-style output.

use std::collections::HashMap;

use regex::Regex;
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
    let Some(tests) = value.get("tests").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut facts = Vec::new();
    for t in tests {
        let Some(name) = t.get("nodeid").and_then(Value::as_str) else {
            continue;
        };
        let outcome_str = t.get("outcome").and_then(Value::as_str).unwrap_or("");
        let Some(outcome) = map_outcome(outcome_str) else {
            continue;
        };
        let message = if outcome == TestOutcome::Fail {
            t.get("call")
                .and_then(|c| c.get("longrepr"))
                .and_then(Value::as_str)
                .map(|m| truncate(m, 500))
        } else {
            None
        };
        facts.push(fact(name.to_string(), outcome, message));
    }
    facts
}

fn map_outcome(s: &str) -> Option<TestOutcome> {
    match s {
        "passed" => Some(TestOutcome::Pass),
        "failed" => Some(TestOutcome::Fail),
        "skipped" => Some(TestOutcome::Skip),
        _ => None,
    }
}

fn parse_text(output: &str) -> Vec<Fact> {
    let failure_messages = collect_failure_messages(output);

    let status_re = Regex::new(r"^(\S+)::(\S+)\s+(PASSED|FAILED|SKIPPED|ERROR)\b").unwrap();
    let mut facts = Vec::new();
    for line in output.lines() {
        let Some(caps) = status_re.captures(line) else {
            continue;
        };
        let test_name = caps[2].to_string();
        let outcome = match &caps[3] {
            "PASSED" => TestOutcome::Pass,
            "FAILED" => TestOutcome::Fail,
            "SKIPPED" => TestOutcome::Skip,
            _ => TestOutcome::Error,
        };
        let message = if outcome == TestOutcome::Fail {
            failure_messages.get(test_name.as_str()).map(|m| truncate(m, 500))
        } else {
            None
        };
        facts.push(fact(test_name, outcome, message));
    }
    facts
}

/// First pass: locate the FAILURES section and, for each `____ NAME
/// ____` sub-banner, take the first `E ` line as the message.
fn collect_failure_messages(output: &str) -> HashMap<String, String> {
    let mut messages = HashMap::new();
    let lines: Vec<&str> = output.lines().collect();

    let section_start = lines.iter().position(|l| l.contains("FAILURES"));
    let Some(start) = section_start else {
        return messages;
    };

    let banner_re = Regex::new(r"^_{3,}\s*(\S+)\s*_{3,}$").unwrap();
    let mut current: Option<String> = None;
    for line in &lines[start + 1..] {
        if let Some(caps) = banner_re.captures(line.trim()) {
            current = Some(caps[1].to_string());
            continue;
        }
        if let Some(name) = &current {
            if !messages.contains_key(name.as_str()) {
                if let Some(rest) = line.trim_start().strip_prefix("E ") {
                    messages.insert(name.clone(), rest.trim().to_string());
                }
            }
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_report_maps_outcomes() {
        let output = r#"{"tests":[
            {"nodeid":"test_a.py::test_passes","outcome":"passed"},
            {"nodeid":"test_a.py::test_fails","outcome":"failed","call":{"longrepr":"AssertionError"}}
        ]}"#;
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[1] {
            Fact::TestResult(r) => assert_eq!(r.message.as_deref(), Some("AssertionError")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn text_output_joins_failures_to_results() {
        let output = "\
=================== FAILURES ===================
____ test_fails ____
some traceback line
E   assert 1 == 2
=================== short test summary ===================
test_a.py::test_fails FAILED
test_a.py::test_passes PASSED
";
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        let failed = facts
            .iter()
            .find_map(|f| match f {
                Fact::TestResult(r) if r.outcome == TestOutcome::Fail => Some(r),
                _ => None,
            })
            .unwrap();
        assert_eq!(failed.message.as_deref(), Some("assert 1 == 2"));
    }
}
