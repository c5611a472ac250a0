//! Parser for the postfix sheet input format.
//!
//! Line 1 holds `cols rows`; the next `cols * rows` lines hold one cell
//! expression each, in row-major order, as whitespace-separated tokens.

use postgrid_engine::engine::{CellRef, Grid};

use crate::error::{PostgridError, Result};
use crate::sheet::Sheet;

/// Parse sheet content from a string.
pub fn parse_sheet(content: &str) -> Result<Sheet> {
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    let grid = parse_dimensions(header)?;

    let mut cells = Vec::with_capacity(grid.cell_count());
    for index in 0..grid.cell_count() {
        let line = lines
            .next()
            .ok_or_else(|| PostgridError::MissingCell(CellRef::from_index(index, &grid)))?;
        cells.push(line.split_whitespace().map(str::to_string).collect());
    }

    Ok(Sheet::new(grid, cells))
}

fn parse_dimensions(header: &str) -> Result<Grid> {
    let bad = || PostgridError::MalformedDimensions(header.to_string());

    let mut parts = header.split_whitespace();
    let cols = parts
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(bad)?;
    let rows = parts
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(bad)?;
    if cols == 0 || rows == 0 {
        return Err(bad());
    }
    Ok(Grid::new(cols, rows))
}
