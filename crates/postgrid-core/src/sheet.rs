//! Sheet model and the evaluation pipeline.

use postgrid_engine::engine::{Grid, build_graph, eval_cell, topo_sort};

use crate::error::Result;

/// A loaded sheet: grid dimensions plus one verbatim token list per cell, in
/// row-major order. Expressions are never mutated after load; the sheet owns
/// them for the process lifetime.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub grid: Grid,
    cells: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(grid: Grid, cells: Vec<Vec<String>>) -> Sheet {
        debug_assert_eq!(cells.len(), grid.cell_count());
        Sheet { grid, cells }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn tokens(&self, index: usize) -> &[String] {
        &self.cells[index]
    }

    /// Evaluate every cell, respecting inter-cell dependencies.
    ///
    /// The pipeline is fixed: build the dependency graph, order it so every
    /// cell follows its dependencies (failing fast on a cycle), then fill the
    /// result table in that order. Each slot is written exactly once, and
    /// only after every slot it reads. The returned values are in natural
    /// row-major index order.
    pub fn evaluate(&self) -> Result<Vec<f32>> {
        let graph = build_graph(&self.grid, &self.cells)?;
        let order = topo_sort(&graph)?;

        let mut results = vec![0.0f32; self.cells.len()];
        for index in order {
            results[index] = eval_cell(&self.grid, &self.cells[index], &results)?;
        }
        Ok(results)
    }
}
