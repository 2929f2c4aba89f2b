//! The fact model: a closed tagged union of fact kinds.
//!
//! Facts are produced by parsers with placeholder `(session_id, t) =
//! ("", 0)`; real values are assigned at insertion time by the store,
//! which allocates a fresh clock tick per fact and dispatches on the
//! tag to the matching table writer. Do not reach for inheritance here
//! — the closed set of kinds below, plus the routing table in
//! `witness-parsers`, is the entirety of the polymorphism.

use serde::{Deserialize, Serialize};

/// One observed file-manipulation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileEventKind {
    Read,
    Edit,
    Create,
    Delete,
}

impl FileEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Edit => "edit",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

/// The outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    Pass,
    Fail,
    Skip,
    Error,
}

impl TestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pass" => Some(Self::Pass),
            "fail" => Some(Self::Fail),
            "skip" => Some(Self::Skip),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Severity of a single static-analysis finding (lint or type error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LintSeverity {
    Info,
    Warning,
    Error,
}

impl LintSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Which of the two pipelines produced a `HookEvent` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookEventKind {
    Lint,
    Record,
}

impl HookEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lint => "lint",
            Self::Record => "record",
        }
    }
}

/// A file read, edit, create, or delete observed by the file parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEventFact {
    pub event: FileEventKind,
    pub file_path: String,
}

/// One test case's outcome, from a test-output parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResultFact {
    pub test_name: String,
    pub outcome: TestOutcome,
    pub message: Option<String>,
}

/// One static-analysis lint finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintResultFact {
    pub file_path: String,
    pub line: Option<u32>,
    pub rule: String,
    pub severity: LintSeverity,
}

/// One type-checker diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeErrorFact {
    pub file_path: String,
    pub line: Option<u32>,
    pub message: String,
}

/// One import edge discovered by import extraction on a file read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFact {
    pub source_file: String,
    pub imported_module: String,
}

/// The raw record of a tool invocation, recorded once per post-hook
/// call regardless of whether any parser recognized it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallFact {
    pub tool_name: String,
    pub tool_input: String,
    pub tool_output: Option<String>,
}

/// The closed tagged union of fact kinds a parser can emit, plus the
/// always-appended `ToolCall` row. `HookEvent` is logged
/// directly by each pipeline and is not part of this union since no
/// parser ever produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fact {
    FileEvent(FileEventFact),
    TestResult(TestResultFact),
    LintResult(LintResultFact),
    TypeError(TypeErrorFact),
    Import(ImportFact),
    ToolCall(ToolCallFact),
}

impl Fact {
    /// The table name this fact dispatches to — used only for tracing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::FileEvent(_) => "file_events",
            Self::TestResult(_) => "test_results",
            Self::LintResult(_) => "lint_results",
            Self::TypeError(_) => "type_errors",
            Self::Import(_) => "imports",
            Self::ToolCall(_) => "tool_calls",
        }
    }
}
