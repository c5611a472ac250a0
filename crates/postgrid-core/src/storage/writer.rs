//! Writer for the evaluated sheet output format.
//!
//! Echoes the grid dimensions, then one value per line in row-major order,
//! formatted with exactly five digits after the decimal point.

use std::fmt::Write;

use crate::sheet::Sheet;

/// Render the result table for a sheet.
pub fn write_results(sheet: &Sheet, results: &[f32]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", sheet.grid.cols, sheet.grid.rows);
    for &value in results {
        let _ = writeln!(out, "{}", format_value(value));
    }
    out
}

/// Five digits after the decimal point, per the output contract.
pub fn format_value(value: f32) -> String {
    format!("{:.5}", value)
}
