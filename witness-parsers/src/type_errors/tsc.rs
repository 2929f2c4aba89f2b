//! tsc: try `file(line,col): error TSXXXX: message` first, then the
//! colon-separated `file:line:col - error TSXXXX: message` form.
//! The emitted message is always prefixed with the `TSXXXX:` code.

use regex::Regex;

use super::fact;
use witness_core::facts::Fact;

fn paren_re() -> Regex {
    Regex::new(r"^(.+?)\((\d+),(\d+)\):\s*error\s+(TS\d+):\s*(.+)$").unwrap()
}

fn colon_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+)\s*-\s*error\s+(TS\d+):\s*(.+)$").unwrap()
}

pub fn parse(output: &str) -> Vec<Fact> {
    let paren = paren_re();
    let colon = colon_re();
    let mut facts = Vec::new();

    for line in output.lines() {
        if let Some(caps) = paren.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                format!("{}: {}", &caps[4], caps[5].trim()),
            ));
            continue;
        }
        if let Some(caps) = colon.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                format!("{}: {}", &caps[4], caps[5].trim()),
            ));
        }
    }
    facts
}
