//! Shell-command predicates shared with `witness-rules`. These mirror
//! the patterns `route_shell_command` uses to pick a parser, but exist
//! here as boolean tests so a rule can ask "is this a test run?" or
//! "is this a commit?" without duplicating the pattern list or
//! needing a parser's structured output.

fn is_match(command: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| {
        regex::Regex::new(p)
            .map(|re| re.is_match(command))
            .unwrap_or(false)
    })
}

/// Whether `command` invokes one of the recognized test runners
/// (jest/vitest/bun-test/pytest/go test/cargo test), regardless of
/// which dedicated parser would ultimately handle its output.
pub fn is_test_runner_command(command: &str) -> bool {
    is_match(
        command,
        &[
            "bun\\s+test",
            "\\bvitest\\b",
            "\\bjest\\b",
            "\\bmocha\\b",
            "npm\\s+test",
            "yarn\\s+test",
            "pnpm\\s+test",
            "npx\\s+jest",
            "npx\\s+vitest",
            "\\bpytest\\b",
            "python\\s+-m\\s+pytest",
            "\\bpy\\.test\\b",
            "go\\s+test",
            "cargo\\s+test",
        ],
    )
}

/// Whether `command` is a version-control commit: `git commit`, or
/// `jj commit`/`jj describe`/`jj new` (jj's equivalents — `describe`
/// sets the commit message, `new` starts the next one, both close out
/// the current change the way `git commit` does).
pub fn is_commit_command(command: &str) -> bool {
    is_match(
        command,
        &["git\\s+commit", "\\bjj\\s+(commit|describe|new)\\b"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_each_test_runner() {
        for cmd in [
            "bun test",
            "npx vitest run",
            "npx jest",
            "npm test",
            "pytest -v",
            "go test ./...",
            "cargo test",
        ] {
            assert!(is_test_runner_command(cmd), "expected match for {cmd}");
        }
    }

    #[test]
    fn rejects_unrelated_commands() {
        assert!(!is_test_runner_command("ls -la"));
    }

    #[test]
    fn recognizes_git_and_jj_commit_forms() {
        assert!(is_commit_command("git commit -m 'x'"));
        assert!(is_commit_command("jj commit"));
        assert!(is_commit_command("jj describe -m 'x'"));
        assert!(is_commit_command("jj new"));
    }

    #[test]
    fn rejects_non_commit_commands() {
        assert!(!is_commit_command("git status"));
        assert!(!is_commit_command("jj log"));
    }
}
