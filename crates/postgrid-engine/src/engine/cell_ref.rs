//! Cell reference parsing and formatting.
//!
//! Converts between cell names (e.g. "B3") and zero-indexed row/column
//! coordinates. The letter selects the row (`'A'` is row 0) and the number
//! selects the 1-based column, so "B3" is row 1, column 2.
//!
//! # Examples
//!
//! ```ignore
//! let cell = CellRef::parse("B3").unwrap();
//! assert_eq!(cell.row, 1);
//! assert_eq!(cell.col, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::error::{EngineError, Result};

/// Grid dimensions. Cells are addressed row-major: `row * cols + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Grid {
        Grid { cols, rows }
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Rebuild a reference from a row-major linear index.
    pub fn from_index(index: usize, grid: &Grid) -> CellRef {
        CellRef::new(index / grid.cols, index % grid.cols)
    }

    /// Parse a cell name. The caller has already classified the token as a
    /// reference (uppercase first character); anything that does not continue
    /// with a positive column number is malformed.
    pub fn parse(token: &str) -> Result<CellRef> {
        let malformed = || EngineError::MalformedIndex(token.to_string());

        let caps = cell_name_re().captures(token).ok_or_else(malformed)?;
        let row = (caps[1].as_bytes()[0] - b'A') as usize;
        // Column numbers are 1-based; "A0" is malformed, not out of range.
        let col = caps[2]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(malformed)?;

        Ok(CellRef::new(row, col))
    }

    /// Resolve to a row-major linear index, bounds-checked against the grid.
    pub fn to_index(&self, grid: &Grid) -> Result<usize> {
        if self.row >= grid.rows || self.col >= grid.cols {
            return Err(EngineError::OutOfRange {
                name: self.to_string(),
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        Ok(self.row * grid.cols + self.col)
    }
}

fn cell_name_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| {
        Regex::new(r"^([A-Z])([0-9]+)$").expect("cell name regex must compile")
    })
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Row letters only cover 'A'..='Z'; parseable names never exceed that.
        if self.row < 26 {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "R{}C{}", self.row, self.col)
        }
    }
}
