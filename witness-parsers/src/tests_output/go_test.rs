//! `go test -v`: two passes. First pass collects the body of each
//! `--- FAIL: NAME` block; second pass emits an outcome for every
//! `--- PASS|FAIL|SKIP: NAME` header line.

use std::collections::HashMap;

use regex::Regex;
use witness_core::facts::{Fact, TestOutcome};

use super::{fact, truncate};

fn header_re() -> Regex {
    Regex::new(r"^\s*---\s*(PASS|FAIL|SKIP):\s*(\S+)").unwrap()
}

pub fn parse(output: &str) -> Vec<Fact> {
    let header = header_re();
    let lines: Vec<&str> = output.lines().collect();

    let mut messages: HashMap<String, String> = HashMap::new();
    let mut current_fail: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();
    for line in &lines {
        if let Some(caps) = header.captures(line) {
            if let Some(name) = current_fail.take() {
                messages.insert(name, truncate(&buffer.join("\n"), 500));
            }
            buffer.clear();
            if &caps[1] == "FAIL" {
                current_fail = Some(caps[2].to_string());
            }
            continue;
        }
        if current_fail.is_some() && (line.starts_with('\t') || line.starts_with("    ")) {
            buffer.push(line.trim());
        }
    }
    if let Some(name) = current_fail.take() {
        messages.insert(name, truncate(&buffer.join("\n"), 500));
    }

    let mut facts = Vec::new();
    for line in &lines {
        let Some(caps) = header.captures(line) else {
            continue;
        };
        let name = caps[2].to_string();
        let outcome = match &caps[1] {
            "PASS" => TestOutcome::Pass,
            "FAIL" => TestOutcome::Fail,
            _ => TestOutcome::Skip,
        };
        let message = if outcome == TestOutcome::Fail {
            messages.get(&name).cloned()
        } else {
            None
        };
        facts.push(fact(name, outcome, message));
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_fail_body_and_emits_all_outcomes() {
        let output = "\
=== RUN   TestAdd
--- FAIL: TestAdd
    add_test.go:10: expected 3, got 4
=== RUN   TestSub
--- PASS: TestSub
";
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[0] {
            Fact::TestResult(r) => {
                assert_eq!(r.test_name, "TestAdd");
                assert_eq!(r.outcome, TestOutcome::Fail);
                assert!(r.message.as_deref().unwrap().contains("expected 3"));
            }
            _ => unreachable!(),
        }
        match &facts[1] {
            Fact::TestResult(r) => assert_eq!(r.outcome, TestOutcome::Pass),
            _ => unreachable!(),
        }
    }

    #[test]
    fn indented_lines_outside_a_fail_block_are_not_captured() {
        let output = "\
=== RUN   TestAdd
--- PASS: TestAdd
    some indented summary noise not attached to any failure
--- FAIL: TestSub
    sub_test.go:4: expected 1, got 2
";
        let facts = parse(output);
        let sub = facts.iter().find_map(|f| match f {
            Fact::TestResult(r) if r.test_name == "TestSub" => Some(r),
            _ => None,
        });
        assert_eq!(
            sub.and_then(|r| r.message.as_deref()),
            Some("sub_test.go:4: expected 1, got 2")
        );
    }
}
