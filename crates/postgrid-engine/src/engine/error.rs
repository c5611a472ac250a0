//! Error types for the postgrid engine.

use thiserror::Error;

/// Errors raised while building, ordering, or evaluating a grid.
///
/// Every variant is fatal: the first one encountered aborts the whole
/// computation, there is no per-cell isolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A reference token whose trailing part is not a positive integer
    /// (e.g. `A0` or `Bx7`).
    #[error("malformed cell index: {0}")]
    MalformedIndex(String),

    /// A reference that decodes outside the declared grid bounds.
    #[error("cell {name} out of range ({rows} rows, {cols} cols)")]
    OutOfRange {
        name: String,
        rows: usize,
        cols: usize,
    },

    /// The dependency graph contains a cycle through the given cell index.
    #[error("cyclic dependency detected on cell {0}")]
    CyclicDependency(usize),

    /// A token that is neither literal nor reference and not one of the six
    /// recognized operators.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Stack underflow, or a stack that does not hold exactly one value once
    /// all tokens are consumed. Carries the offending expression text.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
