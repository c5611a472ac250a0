//! Dependency graph construction from cell expressions.
//!
//! Scans every cell's token list and records an edge u -> v whenever cell u's
//! expression references cell v. Duplicate edges are kept; both the sort and
//! the evaluator are indifferent to them.

use super::cell_ref::{CellRef, Grid};
use super::error::Result;
use super::token;

/// Adjacency list over row-major cell indices.
pub type DepGraph = Vec<Vec<usize>>;

/// Build the dependency graph for all cells. `cells[i]` holds the token list
/// of the cell with linear index `i`. Fails only on malformed or
/// out-of-range references.
pub fn build_graph(grid: &Grid, cells: &[Vec<String>]) -> Result<DepGraph> {
    let mut graph = Vec::with_capacity(cells.len());
    for tokens in cells {
        let mut edges = Vec::new();
        for tok in tokens {
            if token::is_reference(tok) {
                edges.push(CellRef::parse(tok)?.to_index(grid)?);
            }
        }
        graph.push(edges);
    }
    Ok(graph)
}
