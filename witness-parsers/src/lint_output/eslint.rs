//! eslint: a structured `[{filePath, messages:[...]}]` report when
//! present, otherwise two text shapes — a file-header line followed by
//! indented `LINE:COL severity message rule` rows, or the compact
//! `file:line:col: severity message (rule)` form.

use regex::Regex;
use serde_json::Value;
use witness_core::facts::LintSeverity;

use super::{fact, looks_structured};
use witness_core::facts::Fact;

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
    let Some(files) = value.as_array() else {
        return Vec::new();
    };

    let mut facts = Vec::new();
    for entry in files {
        let Some(file_path) = entry.get("filePath").and_then(Value::as_str) else {
            continue;
        };
        let Some(messages) = entry.get("messages").and_then(Value::as_array) else {
            continue;
        };
        for m in messages {
            let line = m.get("line").and_then(Value::as_u64).map(|v| v as u32);
            let rule = m
                .get("ruleId")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or("unknown")
                .to_string();
            let severity = match m.get("severity").and_then(Value::as_u64) {
                Some(2) => LintSeverity::Error,
                Some(1) => LintSeverity::Warning,
                Some(_) => LintSeverity::Info,
                None => LintSeverity::Error,
            };
            facts.push(fact(file_path.to_string(), line, rule, severity));
        }
    }
    facts
}

fn row_re() -> Regex {
    Regex::new(r"^\s*(\d+):(\d+)\s+(error|warning)\s+(.+?)\s+(\S+)\s*$").unwrap()
}

fn compact_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+):\s*(error|warning)\s+(.+?)\s*\(([^()]+)\)\s*$").unwrap()
}

fn parse_text(output: &str) -> Vec<Fact> {
    let row = row_re();
    let compact = compact_re();

    let mut facts = Vec::new();
    let mut current_file: Option<String> = None;
    for line in output.lines() {
        if let Some(caps) = compact.captures(line) {
            let severity = if &caps[4] == "error" {
                LintSeverity::Error
            } else {
                LintSeverity::Warning
            };
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                caps[6].to_string(),
                severity,
            ));
            continue;
        }
        if let Some(caps) = row.captures(line) {
            let Some(file) = &current_file else {
                continue;
            };
            let severity = if &caps[3] == "error" {
                LintSeverity::Error
            } else {
                LintSeverity::Warning
            };
            facts.push(fact(
                file.clone(),
                caps[1].parse().ok(),
                caps[5].to_string(),
                severity,
            ));
            continue;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('\u{2716}') && line == trimmed {
            current_file = Some(trimmed.to_string());
        }
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_report_maps_severities() {
        let output = r#"[{"filePath":"src/a.ts","messages":[
            {"line":3,"column":1,"ruleId":"no-unused-vars","severity":2,"message":"unused"},
            {"line":10,"column":5,"severity":1,"message":"missing semi"}
        ]}]"#;
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[0] {
            Fact::LintResult(r) => {
                assert_eq!(r.rule, "no-unused-vars");
                assert_eq!(r.severity, LintSeverity::Error);
            }
            _ => unreachable!(),
        }
        match &facts[1] {
            Fact::LintResult(r) => {
                assert_eq!(r.rule, "unknown");
                assert_eq!(r.severity, LintSeverity::Warning);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn text_header_and_indented_rows() {
        let output = "src/a.ts\n  3:1  error  unused variable  no-unused-vars\n  10:5  warning  missing semi  semi\n";
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[0] {
            Fact::LintResult(r) => {
                assert_eq!(r.file_path, "src/a.ts");
                assert_eq!(r.line, Some(3));
                assert_eq!(r.rule, "no-unused-vars");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn compact_form_parses() {
        let output = "src/a.ts:3:1: error unused variable (no-unused-vars)\n";
        let facts = parse(output);
        assert_eq!(facts.len(), 1);
        match &facts[0] {
            Fact::LintResult(r) => {
                assert_eq!(r.file_path, "src/a.ts");
                assert_eq!(r.rule, "no-unused-vars");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn malformed_output_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("no findings here").is_empty());
    }
}
