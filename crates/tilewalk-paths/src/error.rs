//! Failure outcomes of a path query.
//!
//! None of these are fatal: callers usually retry with another destination,
//! a different arrived area, or defer the move.

use thiserror::Error;
use tilewalk_core::Coord;

/// Why no route was produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("coordinate {0} is outside the node grid")]
    OutOfBounds(Coord),

    #[error("start tile {0} is not walkable")]
    StartUnwalkable(Coord),

    #[error("search exhausted after {iterations} iterations")]
    Exhausted { iterations: usize },

    #[error("route of {len} tile(s) is too short")]
    Degenerate { len: usize },

    #[error("step costs {straight}/{diagonal} need 0 < straight <= diagonal <= 2 * straight")]
    InvalidCosts { straight: i32, diagonal: i32 },
}

pub type Result<T> = std::result::Result<T, PathError>;
