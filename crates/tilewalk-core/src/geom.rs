//! Geometry primitives: [`Coord`], [`Size`] and [`Area`].
//!
//! Coordinates address tiles by `(row, col)`. Rows grow downwards and
//! columns grow to the right, matching how maps are written out as text.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A tile coordinate on the map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Unit step from `self` towards `target`: each axis of the difference
    /// clamped to `-1..=1`. Both axes move when both differ.
    #[inline]
    pub fn clamp_step(self, target: Coord) -> Coord {
        Coord::new(
            (target.row - self.row).clamp(-1, 1),
            (target.col - self.col).clamp(-1, 1),
        )
    }

    /// Whether both axes of this offset are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0
    }

    /// The eight surrounding coordinates, row offset outer and column offset
    /// inner: `(-1,-1) (-1,0) (-1,1) (0,-1) (0,1) (1,-1) (1,0) (1,1)`.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        let mut out = [self; 8];
        let mut k = 0;
        for drow in -1..=1 {
            for dcol in -1..=1 {
                if drow == 0 && dcol == 0 {
                    continue;
                }
                out[k] = self.shift(drow, dcol);
                k += 1;
            }
        }
        out
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Width (columns) by height (rows) of a footprint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// An empty footprint.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// A single tile.
    pub const ONE: Self = Self {
        width: 1,
        height: 1,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A square footprint of side `n`.
    #[inline]
    pub const fn square(n: i32) -> Self {
        Self::new(n, n)
    }
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// A half-open rectangle of tiles \[min, max). `min` is inclusive, `max` is
/// exclusive on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub min: Coord,
    pub max: Coord,
}

impl Area {
    /// Create an area from two corners, canonicalized so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coord::new(row0.min(row1), col0.min(col1)),
            max: Coord::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The square `[0, side) × [0, side)`.
    #[inline]
    pub fn square(side: i32) -> Self {
        Self::new(0, 0, side.max(0), side.max(0))
    }

    /// The footprint of `size` anchored at `origin`: rows
    /// `[origin.row, origin.row + height)`, columns
    /// `[origin.col, origin.col + width)`.
    #[inline]
    pub fn anchored(origin: Coord, size: Size) -> Self {
        Self {
            min: origin,
            max: origin.shift(size.height.max(0), size.width.max(0)),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of tiles in the area.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the area covers no tiles.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` lies inside the area.
    #[inline]
    pub fn contains(self, p: Coord) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Intersection of two areas. Disjoint areas yield the zero area.
    #[inline]
    pub fn intersect(self, other: Area) -> Self {
        let r = Self {
            min: Coord::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Coord::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every coordinate in the area.
    #[inline]
    pub fn iter(self) -> AreaIter {
        AreaIter {
            area: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl IntoIterator for Area {
    type Item = Coord;
    type IntoIter = AreaIter;
    #[inline]
    fn into_iter(self) -> AreaIter {
        self.iter()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the coordinates of an [`Area`].
///
/// Walks the linear offsets `front..back` of the area and turns each one
/// back into a coordinate, so it runs from either end.
#[derive(Clone, Debug)]
pub struct AreaIter {
    area: Area,
    front: usize,
    back: usize,
}

impl AreaIter {
    fn at(&self, offset: usize) -> Coord {
        let w = self.area.width() as usize;
        self.area.min.shift((offset / w) as i32, (offset % w) as i32)
    }
}

impl Iterator for AreaIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        let p = self.at(self.front);
        self.front += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for AreaIter {
    #[inline]
    fn next_back(&mut self) -> Option<Coord> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for AreaIter {}
