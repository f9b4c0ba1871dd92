//! Search tuning.

use tilewalk_core::Coord;

use crate::distance;
use crate::error::{PathError, Result};

/// Cost model and limits for the A* fallback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    /// Hard cap on node expansions per search.
    pub max_iterations: usize,
    /// Cost of an orthogonal step.
    pub straight_cost: i32,
    /// Cost of a diagonal step.
    pub diagonal_cost: i32,
}

impl PathConfig {
    /// Default expansion cap.
    pub const MAX_ITERATIONS: usize = 300;

    /// Cost of moving by the unit offset `step`.
    #[inline]
    pub fn step_cost(&self, step: Coord) -> i32 {
        if step.is_diagonal() {
            self.diagonal_cost
        } else {
            self.straight_cost
        }
    }

    /// Heuristic estimate from `from` to `to`. Octile distance under the same
    /// step costs, so it never overestimates.
    #[inline]
    pub fn estimate(&self, from: Coord, to: Coord) -> i32 {
        distance::octile(from, to, self.straight_cost, self.diagonal_cost)
    }

    /// Check that the step costs keep the octile estimate admissible.
    ///
    /// Both costs must be positive and a diagonal step may cost no less than
    /// one orthogonal step and no more than two.
    pub fn validate(&self) -> Result<()> {
        let straight = i64::from(self.straight_cost);
        let diagonal = i64::from(self.diagonal_cost);
        if straight > 0 && straight <= diagonal && diagonal <= 2 * straight {
            Ok(())
        } else {
            Err(PathError::InvalidCosts {
                straight: self.straight_cost,
                diagonal: self.diagonal_cost,
            })
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::MAX_ITERATIONS,
            straight_cost: 10,
            diagonal_cost: 14,
        }
    }
}
