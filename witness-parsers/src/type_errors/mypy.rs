//! mypy / pyright: skip `: note:` lines, then try the mypy shape
//! `file:line[:col]: error: message` followed by the pyright shape
//! `file:line:col - error: message`.

use regex::Regex;

use super::fact;
use witness_core::facts::Fact;

fn mypy_re() -> Regex {
    Regex::new(r"^(.+?):(\d+)(?::(\d+))?:\s*error:\s*(.+)$").unwrap()
}

fn pyright_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+)\s*-\s*error:\s*(.+)$").unwrap()
}

pub fn parse(output: &str) -> Vec<Fact> {
    let mypy = mypy_re();
    let pyright = pyright_re();
    let mut facts = Vec::new();

    for line in output.lines() {
        if line.contains(": note:") {
            continue;
        }
        if let Some(caps) = mypy.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                caps[4].trim().to_string(),
            ));
            continue;
        }
        if let Some(caps) = pyright.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                caps[4].trim().to_string(),
            ));
        }
    }
    facts
}
