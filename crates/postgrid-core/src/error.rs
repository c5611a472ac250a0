//! Error types for postgrid core.

use thiserror::Error;

use postgrid_engine::engine::{CellRef, EngineError};

/// Errors that can occur while loading or evaluating a sheet.
#[derive(Error, Debug)]
pub enum PostgridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed grid dimensions: {0:?}")]
    MalformedDimensions(String),

    #[error("missing expression for cell {0}")]
    MissingCell(CellRef),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, PostgridError>;
