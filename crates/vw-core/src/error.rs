//! Core error type.
//!
//! Only construction can fail.  Once a [`Grid`][crate::Grid] exists, every
//! operation on it is total: illegal moves and redundant cleans are sentinels
//! or no-ops, not errors.

use thiserror::Error;

use crate::Position;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("agent start {0} is outside the grid")]
    AgentOutOfBounds(Position),

    #[error("dirt cell {0} is outside the grid")]
    DirtOutOfBounds(Position),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
