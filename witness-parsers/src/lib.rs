//! Tool-call routing and the concrete output parsers.
//!
//! `route` maps a `HookInput` to zero or more [`Fact`]s. Every parser
//! downstream of the router follows the never-throw discipline:
//! malformed or empty output yields an empty sequence rather than a
//! propagated error. Facts come back with the placeholder
//! `(session_id, t)` that `witness-store::facts::insert_fact` replaces
//! at write time — nothing in this crate talks to a store directly.

pub mod commands;
pub mod file_parser;
pub mod import_extraction;
pub mod lint_output;
pub mod tests_output;
pub mod type_errors;

use witness_core::facts::Fact;
use witness_core::hook::HookInput;

const FILE_TOOLS: &[&str] = &[
    "Edit",
    "edit",
    "str_replace_editor",
    "Write",
    "write",
    "file_create",
    "create_file",
    "Read",
    "read",
    "view",
    "cat",
];

const SHELL_TOOLS: &[&str] = &["Bash", "bash", "terminal", "execute_command"];

/// Whether `tool_name` is one of the recognized file-manipulation
/// tools (read, edit, write, or create — see [`file_parser::event_kind`]
/// for which of those it resolves to).
pub fn is_file_tool(tool_name: &str) -> bool {
    FILE_TOOLS.iter().any(|t| *t == tool_name)
}

/// Whether `tool_name` is one of the recognized shell-execution tools.
pub fn is_shell_tool(tool_name: &str) -> bool {
    SHELL_TOOLS.iter().any(|t| *t == tool_name)
}

/// Whether `tool_name` is a recognized file tool that edits or creates
/// (as opposed to merely reading) — the `no_edit_unread`,
/// `test_after_edits`, `no_thrashing`, `fix_regressions_first`, and
/// `scope_check` rules all apply to exactly this set.
pub fn is_edit_or_create_tool(tool_name: &str) -> bool {
    is_file_tool(tool_name) && file_parser::event_kind(tool_name) != witness_core::facts::FileEventKind::Read
}

/// Route a tool call to the facts its output implies. Never panics;
/// an unrecognized tool or unparseable output yields an empty vector.
pub fn route(input: &HookInput) -> Vec<Fact> {
    if FILE_TOOLS.iter().any(|t| *t == input.tool_name) {
        return file_parser::parse(input);
    }
    if SHELL_TOOLS.iter().any(|t| *t == input.tool_name) {
        let Some(command) = input.command() else {
            return Vec::new();
        };
        return route_shell_command(command, input.tool_output.as_deref().unwrap_or(""));
    }
    Vec::new()
}

/// Dispatch a shell command to the dedicated parser whose pattern
/// matches first. Dedicated parsers (bun-test, vitest) are checked
/// ahead of the generic jest-family pattern they would otherwise also
/// match (e.g. `bun test` matches a generic "test" pattern too).
fn route_shell_command(command: &str, output: &str) -> Vec<Fact> {
    if is_match(command, &["bun\\s+test"]) {
        return tests_output::bun_test::parse(output);
    }
    if is_match(command, &["\\bvitest\\b"]) {
        return tests_output::vitest::parse(output);
    }
    if is_match(
        command,
        &[
            "\\bjest\\b",
            "\\bmocha\\b",
            "npm\\s+test",
            "yarn\\s+test",
            "pnpm\\s+test",
            "npx\\s+jest",
            "npx\\s+vitest",
        ],
    ) {
        return tests_output::jest::parse(output);
    }
    if is_match(command, &["\\bpytest\\b", "python\\s+-m\\s+pytest", "\\bpy\\.test\\b"]) {
        return tests_output::pytest::parse(output);
    }
    if is_match(command, &["go\\s+test"]) {
        return tests_output::go_test::parse(output);
    }
    if is_match(command, &["cargo\\s+test"]) {
        return tests_output::cargo_test::parse(output);
    }
    if is_match(command, &["\\beslint\\b", "npx\\s+eslint", "yarn\\s+eslint", "pnpm\\s+eslint"]) {
        return lint_output::eslint::parse(output);
    }
    if is_match(
        command,
        &["\\bflake8\\b", "\\bruff\\b", "ruff\\s+check", "python\\s+-m\\s+flake8"],
    ) {
        return lint_output::flake8::parse(output);
    }
    if is_match(command, &["\\btsc\\b", "npx\\s+tsc", "bunx\\s+tsc"]) {
        return type_errors::tsc::parse(output);
    }
    if is_match(
        command,
        &["\\bmypy\\b", "\\bpyright\\b", "python\\s+-m\\s+mypy", "python\\s+-m\\s+pyright"],
    ) {
        return type_errors::mypy::parse(output);
    }
    if is_match(
        command,
        &["biome\\s+check", "biome\\s+lint", "biome\\s+ci", "npx\\s+biome", "bunx\\s+biome"],
    ) {
        return lint_output::biome::parse(output);
    }
    Vec::new()
}

fn is_match(command: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| {
        regex::Regex::new(p)
            .map(|re| re.is_match(command))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use witness_core::facts::FileEventKind;

    fn input(tool_name: &str, tool_input: serde_json::Value, tool_output: Option<&str>) -> HookInput {
        let mut payload = json!({ "tool_name": tool_name, "tool_input": tool_input });
        if let Some(out) = tool_output {
            payload["tool_output"] = json!(out);
        }
        HookInput::parse(&payload.to_string()).unwrap()
    }

    #[test]
    fn routes_edit_to_file_parser() {
        let facts = route(&input("Edit", json!({"file_path": "src/a.ts"}), None));
        assert_eq!(facts.len(), 1);
        match &facts[0] {
            Fact::FileEvent(f) => assert_eq!(f.event, FileEventKind::Edit),
            other => panic!("unexpected fact {other:?}"),
        }
    }

    #[test]
    fn unrecognized_tool_yields_nothing() {
        let facts = route(&input("SomeOtherTool", json!({}), None));
        assert!(facts.is_empty());
    }

    #[test]
    fn bun_test_wins_over_generic_jest_pattern() {
        let facts = route(&input(
            "Bash",
            json!({"command": "bun test"}),
            Some("(pass) my test [1ms]\n"),
        ));
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn shell_tool_with_no_command_yields_nothing() {
        let facts = route(&input("Bash", json!({}), None));
        assert!(facts.is_empty());
    }

    #[test]
    fn edit_and_write_tools_are_edit_or_create() {
        assert!(is_edit_or_create_tool("Edit"));
        assert!(is_edit_or_create_tool("Write"));
        assert!(is_edit_or_create_tool("str_replace_editor"));
    }

    #[test]
    fn read_tools_are_not_edit_or_create() {
        assert!(!is_edit_or_create_tool("Read"));
        assert!(!is_edit_or_create_tool("cat"));
    }

    #[test]
    fn non_file_tools_are_not_edit_or_create() {
        assert!(!is_edit_or_create_tool("Bash"));
    }
}
