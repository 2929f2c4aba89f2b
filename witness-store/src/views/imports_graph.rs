//! Import-graph views: `depends_on`, `blast_radius`.
//!
//! Both are breadth-first closures over the `imports` edge list,
//! bounded at depth 10. `depends_on` walks the graph forward
//! (source -> imported_module); `blast_radius` walks it in reverse
//! (imported_module -> every source that imports it). Callers
//! (`scope_check`) seed `blast_radius` from each of the session's
//! edited files to ask "is this path downstream of an edit?".

use std::collections::{HashMap, VecDeque};

use witness_core::errors::StoreError;
use witness_core::SessionId;

use crate::connection::Store;
use crate::views::raw;

const MAX_DEPTH: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DependencyEdge {
    pub module: String,
    pub depth: u32,
}

/// Transitive closure of modules `file_path` imports, directly or
/// indirectly, each reported at the minimum depth it was reached.
pub fn depends_on(
    store: &Store,
    session: &SessionId,
    file_path: &str,
) -> Result<Vec<DependencyEdge>, StoreError> {
    let imports = raw::all_imports(store, session)?;
    let mut forward: HashMap<&str, Vec<&str>> = HashMap::new();
    for i in &imports {
        forward
            .entry(i.source_file.as_str())
            .or_default()
            .push(i.imported_module.as_str());
    }
    Ok(bfs_closure(&forward, file_path))
}

/// Every file in this session that transitively imports `module`
/// (directly or indirectly), the reverse of [`depends_on`]. Useful for
/// estimating the blast radius of editing `module`: a row here means
/// that file would plausibly be affected, whether or not it has itself
/// been touched yet this session.
pub fn blast_radius(
    store: &Store,
    session: &SessionId,
    module: &str,
) -> Result<Vec<DependencyEdge>, StoreError> {
    let imports = raw::all_imports(store, session)?;
    let mut reverse: HashMap<&str, Vec<&str>> = HashMap::new();
    for i in &imports {
        reverse
            .entry(i.imported_module.as_str())
            .or_default()
            .push(i.source_file.as_str());
    }
    Ok(bfs_closure(&reverse, module))
}

fn bfs_closure(graph: &HashMap<&str, Vec<&str>>, start: &str) -> Vec<DependencyEdge> {
    let mut visited: HashMap<String, u32> = HashMap::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    queue.push_back((start.to_string(), 0));
    visited.insert(start.to_string(), 0);

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= MAX_DEPTH {
            continue;
        }
        if let Some(neighbors) = graph.get(node.as_str()) {
            for &next in neighbors {
                if !visited.contains_key(next) {
                    visited.insert(next.to_string(), depth + 1);
                    queue.push_back((next.to_string(), depth + 1));
                }
            }
        }
    }

    visited.remove(start);
    let mut rows: Vec<_> = visited
        .into_iter()
        .map(|(module, depth)| DependencyEdge { module, depth })
        .collect();
    rows.sort_by(|a, b| a.depth.cmp(&b.depth).then(a.module.cmp(&b.module)));
    rows
}
