//! Compass directions between adjacent tiles.

use std::fmt;

use crate::geom::Coord;

/// One of the eight moves between neighbouring tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset of this direction. North is `row - 1`.
    pub const fn delta(self) -> Coord {
        match self {
            Direction::North => Coord::new(-1, 0),
            Direction::NorthEast => Coord::new(-1, 1),
            Direction::East => Coord::new(0, 1),
            Direction::SouthEast => Coord::new(1, 1),
            Direction::South => Coord::new(1, 0),
            Direction::SouthWest => Coord::new(1, -1),
            Direction::West => Coord::new(0, -1),
            Direction::NorthWest => Coord::new(-1, -1),
        }
    }

    /// Direction of a unit offset, or `None` for zero or longer offsets.
    pub fn from_delta(d: Coord) -> Option<Direction> {
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.delta().is_diagonal()
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_round_trips_through_from_delta() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.delta() + dir.reverse().delta(), Coord::ZERO);
        }
    }

    #[test]
    fn non_unit_offsets_have_no_direction() {
        assert_eq!(Direction::from_delta(Coord::ZERO), None);
        assert_eq!(Direction::from_delta(Coord::new(2, 0)), None);
        assert!(Direction::SouthWest.is_diagonal());
        assert!(!Direction::East.is_diagonal());
    }
}
