//! Straight-line traversal used for the shortcut check.

use tilewalk_core::Coord;

use crate::distance;

/// Iterator over the 8-way line from `start` to `stop`, both ends included.
///
/// Each step moves every axis that still differs from `stop` by one tile,
/// so the line runs diagonally until one axis lines up and then straight.
/// The line ignores obstacles. It is empty when `start == stop`.
#[derive(Clone, Debug)]
pub struct StraightLine {
    next: Option<Coord>,
    stop: Coord,
}

impl StraightLine {
    pub fn new(start: Coord, stop: Coord) -> Self {
        Self {
            next: (start != stop).then_some(start),
            stop,
        }
    }
}

impl Iterator for StraightLine {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let cur = self.next?;
        self.next = (cur != self.stop).then(|| cur + cur.clamp_step(self.stop));
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(cur) => distance::chebyshev(cur, self.stop) as usize + 1,
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for StraightLine {}
