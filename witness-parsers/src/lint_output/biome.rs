//! biome: a structured `{diagnostics:[{category, severity,
//! location:{path:{file}}}]}` report when present. Text mode only
//! recognizes lines of the form `file:line:col CATEGORY ━` (or the
//! compact variant) and reports every diagnostic found that way as
//! `error`, since biome's plain-text renderer doesn't carry severity.

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
    let Some(diagnostics) = value.get("diagnostics").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut facts = Vec::new();
    for d in diagnostics {
        let Some(file_path) = d
            .get("location")
            .and_then(|l| l.get("path"))
            .and_then(|p| p.get("file"))
            .and_then(Value::as_str)
        else {
            continue;
        };
        let category = d
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let severity = match d.get("severity").and_then(Value::as_str) {
            Some("warning") | Some("warn") => LintSeverity::Warning,
            Some("info") | Some("information") => LintSeverity::Info,
            _ => LintSeverity::Error,
        };
        facts.push(fact(file_path.to_string(), None, category, severity));
    }
    facts
}

fn line_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+)\s+(\S+)\s+\u{2501}").unwrap()
}

fn compact_re() -> Regex {
    Regex::new(r"^(.+?):(\d+):(\d+):\s*(\S+)\s*$").unwrap()
}

fn parse_text(output: &str) -> Vec<Fact> {
    let re = line_re();
    let compact = compact_re();
    let mut facts = Vec::new();
    for line in output.lines() {
        if let Some(caps) = re.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                caps[4].to_string(),
                LintSeverity::Error,
            ));
            continue;
        }
        if let Some(caps) = compact.captures(line) {
            facts.push(fact(
                caps[1].to_string(),
                caps[2].parse().ok(),
                caps[4].to_string(),
                LintSeverity::Error,
            ));
        }
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_report_maps_severities() {
        let output = r#"{"diagnostics":[
            {"category":"lint/suspicious/noExplicitAny","severity":"error","location":{"path":{"file":"a.ts"}}},
            {"category":"lint/style/useConst","severity":"warning","location":{"path":{"file":"b.ts"}}}
        ]}"#;
        let facts = parse(output);
        assert_eq!(facts.len(), 2);
        match &facts[0] {
            Fact::LintResult(r) => {
                assert_eq!(r.rule, "lint/suspicious/noExplicitAny");
                assert_eq!(r.severity, LintSeverity::Error);
            }
            _ => unreachable!(),
        }
        match &facts[1] {
            Fact::LintResult(r) => assert_eq!(r.severity, LintSeverity::Warning),
            _ => unreachable!(),
        }
    }

    #[test]
    fn text_mode_reports_category_as_error() {
        let output = "a.ts:3:1 lint/style/useConst \u{2501}\u{2501}\u{2501}\n";
        let facts = parse(output);
        assert_eq!(facts.len(), 1);
        match &facts[0] {
            Fact::LintResult(r) => {
                assert_eq!(r.rule, "lint/style/useConst");
                assert_eq!(r.severity, LintSeverity::Error);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn malformed_output_yields_nothing() {
        assert!(parse("").is_empty());
    }
}
