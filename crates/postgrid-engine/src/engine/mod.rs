//! Postfix spreadsheet engine API.
//!
//! This module provides the computational core of postgrid:
//!
//! - [`Grid`], [`CellRef`] - grid dimensions and cell addressing
//! - [`build_graph`] - dependency graph construction from cell expressions
//! - [`topo_sort`] - cycle detection + dependency-first ordering
//! - [`eval_cell`] - postfix expression evaluation
//! - [`EngineError`] - the engine's error taxonomy

mod cell_ref;
mod cycle;
mod deps;
mod error;
mod eval;
mod token;

pub use cell_ref::{CellRef, Grid};
pub use cycle::topo_sort;
pub use deps::{DepGraph, build_graph};
pub use error::{EngineError, Result};
pub use eval::eval_cell;
pub use token::{Op, is_literal, is_reference, parse_literal};
