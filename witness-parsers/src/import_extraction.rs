//! Shallow regex-based import extraction, dispatched by file
//! extension. No AST is built; a handful of anchored, multiline
//! patterns per language capture the specifier.

use std::collections::HashSet;

use regex::Regex;

use witness_core::facts::ImportFact;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Js,
    Python,
    Rust,
    Go,
}

fn language_for(path: &str) -> Option<Language> {
    let ext = path.rsplit('.').next()?;
    match ext {
        "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" | "mts" | "cts" => Some(Language::Js),
        "py" | "pyi" => Some(Language::Python),
        "rs" => Some(Language::Rust),
        "go" => Some(Language::Go),
        _ => None,
    }
}

/// Extract distinct `(source_file, imported_module)` pairs from
/// `source`. Any internal failure (a pattern that fails to compile, an
/// unrecognized extension) yields an empty sequence.
pub fn extract(source_file: &str, source: &str) -> Vec<ImportFact> {
    let Some(lang) = language_for(source_file) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut facts = Vec::new();
    for specifier in specifiers_for(lang, source) {
        if seen.insert(specifier.clone()) {
            facts.push(ImportFact {
                source_file: source_file.to_string(),
                imported_module: specifier,
            });
        }
    }
    facts
}

fn specifiers_for(lang: Language, source: &str) -> Vec<String> {
    let patterns: &[&str] = match lang {
        Language::Js => &[
            r#"(?m)^\s*import\s+(?:[\w*{}\s,]+\s+from\s+)?["']([^"']+)["']"#,
            r#"(?m)\brequire\(\s*["']([^"']+)["']\s*\)"#,
            r#"(?m)\bimport\(\s*["']([^"']+)["']\s*\)"#,
            r#"(?m)^\s*export\s+(?:[\w*{}\s,]+\s+)?from\s+["']([^"']+)["']"#,
        ],
        Language::Python => &[
            r#"(?m)^\s*import\s+([\w.]+)"#,
            r#"(?m)^\s*from\s+([\w.]+)\s+import\b"#,
        ],
        Language::Rust => &[
            r#"(?m)^\s*use\s+([\w:]+)"#,
            r#"(?m)^\s*(?:pub\s+)?mod\s+(\w+)\s*;"#,
        ],
        Language::Go => &[
            r#"(?m)^\s*import\s+"([^"]+)""#,
            r#"(?m)^\s*"([^"]+)"\s*$"#,
        ],
    };

    let mut out = Vec::new();
    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        for caps in re.captures_iter(source) {
            if let Some(m) = caps.get(1) {
                out.push(m.as_str().to_string());
            }
        }
    }
    out
}
