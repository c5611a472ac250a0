//! Cycle detection and dependency-first ordering.
//!
//! Depth-first traversal over the dependency graph producing a sink-to-root
//! order: every cell appears after all cells it depends on, so the result
//! table can be filled left to right. A dependency found on the active path
//! is a cycle and aborts the whole sort; no partial order is usable.

use super::deps::DepGraph;
use super::error::{EngineError, Result};

/// One traversal frame: a cell and how many of its dependencies are done.
struct Frame {
    cell: usize,
    next_dep: usize,
}

/// Topologically sort the graph, dependencies first.
///
/// Roots are tried in index order and each cell's dependencies are visited in
/// the order its expression mentions them, so the output is deterministic.
/// The traversal keeps its own frame stack; depth is bounded by memory, not
/// by the call stack, even for pathologically deep dependency chains.
pub fn topo_sort(graph: &DepGraph) -> Result<Vec<usize>> {
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    let mut sorted = Vec::with_capacity(n);

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;
        let mut stack = vec![Frame { cell: root, next_dep: 0 }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.cell;
            if frame.next_dep < graph[u].len() {
                let v = graph[u][frame.next_dep];
                frame.next_dep += 1;
                if on_path[v] {
                    return Err(EngineError::CyclicDependency(v));
                }
                if !visited[v] {
                    visited[v] = true;
                    on_path[v] = true;
                    stack.push(Frame { cell: v, next_dep: 0 });
                }
            } else {
                sorted.push(u);
                on_path[u] = false;
                stack.pop();
            }
        }
    }

    Ok(sorted)
}
