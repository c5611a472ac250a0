//! postgrid_engine - dependency ordering + postfix evaluation for cell grids.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    fn cells(exprs: &[&str]) -> Vec<Vec<String>> {
        exprs
            .iter()
            .map(|e| e.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    /// Build, sort, and evaluate a whole grid the way the orchestrator does.
    fn run(grid: Grid, exprs: &[&str]) -> Result<Vec<f32>> {
        let cells = cells(exprs);
        let graph = build_graph(&grid, &cells)?;
        let order = topo_sort(&graph)?;
        let mut results = vec![0.0f32; cells.len()];
        for index in order {
            results[index] = eval_cell(&grid, &cells[index], &results)?;
        }
        Ok(results)
    }

    #[test]
    fn test_single_cell_grid() {
        let results = run(Grid::new(1, 1), &["5"]).unwrap();
        assert_eq!(results, vec![5.0]);
    }

    #[test]
    fn test_independent_cells() {
        let results = run(Grid::new(1, 2), &["3 4 +", "2"]).unwrap();
        assert_eq!(results, vec![7.0, 2.0]);
    }

    #[test]
    fn test_dependency_resolved_before_use() {
        let results = run(Grid::new(1, 2), &["5", "A1 ++"]).unwrap();
        assert_eq!(results, vec![5.0, 6.0]);
    }

    #[test]
    fn test_forward_reference() {
        // A1 reads B1, which appears later in input order.
        let results = run(Grid::new(1, 2), &["B1 2 *", "21"]).unwrap();
        assert_eq!(results, vec![42.0, 21.0]);
    }

    #[test]
    fn test_transitive_chain() {
        let results = run(Grid::new(1, 3), &["B1 1 +", "C1 1 +", "1"]).unwrap();
        assert_eq!(results, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_multi_column_row_major_addressing() {
        // 2 cols x 2 rows: A1 A2 / B1 B2 in input order.
        let results = run(Grid::new(2, 2), &["1", "2", "A1 A2 +", "B1 A2 *"]).unwrap();
        assert_eq!(results, vec![1.0, 2.0, 3.0, 6.0]);
    }

    #[test]
    fn test_duplicate_references() {
        let results = run(Grid::new(1, 2), &["B1 B1 *", "3"]).unwrap();
        assert_eq!(results, vec![9.0, 3.0]);
    }

    #[test]
    fn test_mutual_reference_fails() {
        let err = run(Grid::new(1, 2), &["B1 1 +", "A1 1 +"]).unwrap_err();
        assert!(matches!(err, EngineError::CyclicDependency(_)));
    }

    #[test]
    fn test_self_reference_fails() {
        let err = run(Grid::new(1, 1), &["A1 1 +"]).unwrap_err();
        assert_eq!(err, EngineError::CyclicDependency(0));
    }

    #[test]
    fn test_out_of_range_reference_fails() {
        let err = run(Grid::new(1, 1), &["B1"]).unwrap_err();
        assert!(matches!(err, EngineError::OutOfRange { .. }));
    }

    #[test]
    fn test_malformed_index_fails() {
        let err = run(Grid::new(1, 1), &["A0"]).unwrap_err();
        assert_eq!(err, EngineError::MalformedIndex("A0".to_string()));
    }

    #[test]
    fn test_literal_only_grid_is_order_independent() {
        let exprs = ["4", "-2", "0.5", "100"];
        let results = run(Grid::new(2, 2), &exprs).unwrap();
        assert_eq!(results, vec![4.0, -2.0, 0.5, 100.0]);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let exprs = ["B1 C1 +", "C1 2 *", "7"];
        let first = run(Grid::new(1, 3), &exprs).unwrap();
        let second = run(Grid::new(1, 3), &exprs).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![21.0, 14.0, 7.0]);
    }
}
