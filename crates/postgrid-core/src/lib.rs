//! postgrid_core - sheet model + text storage around the engine.

pub mod error;
pub mod sheet;
pub mod storage;

pub use error::{PostgridError, Result};
pub use sheet::Sheet;
pub use storage::{parse_sheet, write_results};

pub use postgrid_engine::engine::{CellRef, Grid};
