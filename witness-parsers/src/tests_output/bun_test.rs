//! `bun test` text output: lines of the form `(pass) NAME [DURATION]`
//! and `(fail) NAME [DURATION]`.

use regex::Regex;
use witness_core::facts::{Fact, TestOutcome};

use super::{fact, truncate};

fn line_re() -> Regex {
    Regex::new(r"^\s*\((pass|fail)\)\s+(.+?)(?:\s+\[[\d.]+m?s\])?\s*$").unwrap()
}

pub fn parse(output: &str) -> Vec<Fact> {
    let re = line_re();
    let lines: Vec<&str> = output.lines().collect();
    let mut facts = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let outcome = if &caps[1] == "pass" {
            TestOutcome::Pass
        } else {
            TestOutcome::Fail
        };
        let name = caps[2].trim().to_string();

        let message = if outcome == TestOutcome::Fail {
            lines
                .iter()
                .skip(i + 1)
                .take(5)
                .map(|l| l.trim())
                .find(|l| l.starts_with("error:") || l.contains("Error:"))
                .map(|l| truncate(l, 500))
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
    use witness_core::facts::TestOutcome;

    #[test]
    fn parses_pass_and_fail_lines() {
        let output = "(pass) adds numbers [0.42ms]\n(fail) subtracts numbers [1.1ms]\n  error: expected 1\n";
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[1] {
            Fact::TestResult(r) => {
                assert_eq!(r.outcome, TestOutcome::Fail);
                assert_eq!(r.message.as_deref(), Some("error: expected 1"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        assert!(parse("running 3 tests\n").is_empty());
    }
}
