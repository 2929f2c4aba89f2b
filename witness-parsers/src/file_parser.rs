//! File-manipulation tool parser. Extracts one `FileEvent`, and for
//! reads with source text in `tool_output`, runs import extraction.

use witness_core::facts::{Fact, FileEventFact, FileEventKind};
use witness_core::hook::HookInput;

use crate::import_extraction;

pub fn parse(input: &HookInput) -> Vec<Fact> {
    let Some(path) = input.file_path() else {
        return Vec::new();
    };

    let event = event_kind(&input.tool_name);
    let mut facts = vec![Fact::FileEvent(FileEventFact {
        event: event.clone(),
        file_path: path.to_string(),
    })];

    if event == FileEventKind::Read {
        if let Some(source) = input.tool_output.as_deref() {
            facts.extend(
                import_extraction::extract(path, source)
                    .into_iter()
                    .map(Fact::Import),
            );
        }
    }

    facts
}

pub fn event_kind(tool_name: &str) -> FileEventKind {
    match tool_name {
        "Write" | "write" | "file_create" | "create_file" => FileEventKind::Create,
        "Read" | "read" | "view" | "cat" => FileEventKind::Read,
        _ => FileEventKind::Edit,
    }
}
