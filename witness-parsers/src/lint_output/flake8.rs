//! flake8 / ruff: a structured JSON array of
//! `{filename, location:{row,column}, code, message}` when present,
//! otherwise the `file:line:col: CODE message` text form. Severity in
//! both cases is derived from the code's leading letter: `E`/`F` is an
//! error, `W` (and anything else) is a warning.

use regex::Regex;
use serde_json::Value;
use witness_core::facts::LintSeverity;

use super::fact;
use witness_core::facts::Fact;

fn severity_for_code(code: &str) -> LintSeverity {
    match code.chars().next() {
        Some('E') | Some('F') => LintSeverity::Error,
        _ => LintSeverity::Warning,
    }
}

pub fn parse(output: &str) -> Vec<Fact> {
    if matches!(output.trim_start().chars().next(), Some('[')) {
        if let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(output) {
            let structured = parse_structured(&entries);
            if !structured.is_empty() {
                return structured;
            }
        }
    }
    parse_text(output)
}

fn parse_structured(entries: &[Value]) -> Vec<Fact> {
    let mut facts = Vec::new();
    for e in entries {
        let Some(filename) = e.get("filename").and_then(Value::as_str) else {
            continue;
        };
        let Some(code) = e.get("code").and_then(Value::as_str) else {
            continue;
        };
        let line = e
            .get("location")
            .and_then(|l| l.get("row"))
            .and_then(Value::as_u64)
            .map(|v| v as u32);
        facts.push(fact(
            filename.to_string(),
            line,
            code.to_string(),
            severity_for_code(code),
        ));
    }
    facts
}

fn line_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+):\s*([EWF]\d+)\s+(.+)$").unwrap()
}

fn parse_text(output: &str) -> Vec<Fact> {
    let re = line_re();
    let mut facts = Vec::new();
    for line in output.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let code = caps[4].to_string();
        facts.push(fact(
            caps[1].to_string(),
            caps[2].parse().ok(),
            code.clone(),
            severity_for_code(&code),
        ));
    }
    facts
}
