//! A square tile map for simulations, tests and tooling.
//!
//! [`TileMap`] stores one [`MapTile`] per coordinate in row-major order and
//! implements [`TileSource`], so it can back a path engine directly. Maps can
//! be written out as text, one glyph per tile:
//!
//! ```text
//! ..#..
//! ..#..
//! ..=..
//! ~~=~~
//! ..=..
//! ```

use std::fmt;

use thiserror::Error;

use crate::geom::{Area, Coord};
use crate::tiles::{Tile, TileSource};

/// Ground type of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Grass,
    Road,
    Rock,
    Water,
    Tree,
    Building,
}

impl Terrain {
    /// Whether agents can walk on this terrain.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Terrain::Grass | Terrain::Road)
    }

    /// Text glyph used by [`TileMap::parse`] and [`TileMap::to_ascii`].
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Grass => '.',
            Terrain::Road => '=',
            Terrain::Rock => '#',
            Terrain::Water => '~',
            Terrain::Tree => 'T',
            Terrain::Building => 'B',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Terrain> {
        Some(match ch {
            '.' => Terrain::Grass,
            '=' => Terrain::Road,
            '#' => Terrain::Rock,
            '~' => Terrain::Water,
            'T' => Terrain::Tree,
            'B' => Terrain::Building,
            _ => return None,
        })
    }
}

/// A tile of a [`TileMap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapTile {
    pub pos: Coord,
    pub terrain: Terrain,
}

impl Tile for MapTile {
    #[inline]
    fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    fn is_walkable(&self) -> bool {
        self.terrain.is_walkable()
    }
}

/// Errors reported while parsing a text map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map text contains no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map must be square, got {rows} rows of {cols} tiles")]
    NotSquare { rows: usize, cols: usize },

    #[error("unknown glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Coord },
}

/// A square map of `size × size` tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    size: i32,
    tiles: Vec<MapTile>,
}

impl TileMap {
    /// Create a map of side `size` filled with `terrain`.
    pub fn new(size: i32, terrain: Terrain) -> Self {
        let size = size.max(0);
        let tiles = Area::square(size)
            .iter()
            .map(|pos| MapTile { pos, terrain })
            .collect();
        Self { size, tiles }
    }

    /// Parse a map from text, one row per line. Blank lines and trailing
    /// whitespace are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let cols = first.chars().count();
        if cols != rows.len() {
            return Err(MapError::NotSquare {
                rows: rows.len(),
                cols,
            });
        }

        let mut tiles = Vec::with_capacity(cols * cols);
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::Ragged {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let pos = Coord::new(r as i32, c as i32);
                let terrain =
                    Terrain::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, pos })?;
                tiles.push(MapTile { pos, terrain });
            }
        }

        Ok(Self {
            size: cols as i32,
            tiles,
        })
    }

    /// Side length of the map.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The full extent as an area.
    #[inline]
    pub fn bounds(&self) -> Area {
        Area::square(self.size)
    }

    #[inline]
    fn index(&self, p: Coord) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.row * self.size + p.col) as usize)
    }

    /// Terrain at `p`, or `None` outside the map.
    pub fn terrain(&self, p: Coord) -> Option<Terrain> {
        self.index(p).map(|i| self.tiles[i].terrain)
    }

    /// Set the terrain at `p`. Does nothing outside the map.
    pub fn set(&mut self, p: Coord, terrain: Terrain) {
        if let Some(i) = self.index(p) {
            self.tiles[i].terrain = terrain;
        }
    }

    /// Set every tile of `area` that lies on the map.
    pub fn fill(&mut self, area: Area, terrain: Terrain) {
        for p in area.intersect(self.bounds()) {
            self.set(p, terrain);
        }
    }

    /// Iterate over all tiles in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, MapTile> {
        self.tiles.iter()
    }

    /// Render the map as text, the inverse of [`parse`](Self::parse).
    pub fn to_ascii(&self) -> String {
        let mut s = String::with_capacity(self.tiles.len() + self.size as usize);
        for row in self.tiles.chunks(self.size.max(1) as usize) {
            s.extend(row.iter().map(|t| t.terrain.glyph()));
            s.push('\n');
        }
        s
    }
}

impl TileSource for TileMap {
    type Tile = MapTile;

    #[inline]
    fn extent(&self) -> i32 {
        self.size
    }

    #[inline]
    fn tile(&self, pos: Coord) -> Option<&MapTile> {
        self.index(pos).map(|i| &self.tiles[i])
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let m = TileMap::new(4, Terrain::Grass);
        assert_eq!(m.size(), 4);
        assert_eq!(m.extent(), 4);
        assert_eq!(m.iter().count(), 16);
        assert_eq!(m.tile(Coord::new(3, 2)).map(|t| t.pos), Some(Coord::new(3, 2)));
        assert!(m.tile(Coord::new(4, 0)).is_none());
        assert!(m.tile(Coord::new(0, -1)).is_none());
    }

    #[test]
    fn set_and_walkability() {
        let mut m = TileMap::new(3, Terrain::Grass);
        m.set(Coord::new(1, 1), Terrain::Water);
        m.set(Coord::new(7, 7), Terrain::Water);
        assert_eq!(m.terrain(Coord::new(1, 1)), Some(Terrain::Water));
        assert!(!m.tile(Coord::new(1, 1)).is_some_and(|t| t.is_walkable()));
        assert!(m.tile(Coord::new(0, 1)).is_some_and(|t| t.is_walkable()));
    }

    #[test]
    fn fill_clips_to_map() {
        let mut m = TileMap::new(3, Terrain::Grass);
        m.fill(Area::new(1, 1, 9, 9), Terrain::Building);
        assert_eq!(m.terrain(Coord::new(2, 2)), Some(Terrain::Building));
        assert_eq!(m.terrain(Coord::new(0, 2)), Some(Terrain::Grass));
    }

    #[test]
    fn parse_reads_rows_as_rows() {
        let m = TileMap::parse("..#\n.=.\n~..\n").unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.terrain(Coord::new(0, 2)), Some(Terrain::Rock));
        assert_eq!(m.terrain(Coord::new(1, 1)), Some(Terrain::Road));
        assert_eq!(m.terrain(Coord::new(2, 0)), Some(Terrain::Water));
        assert_eq!(m.to_ascii(), "..#\n.=.\n~..\n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(TileMap::parse("\n\n"), Err(MapError::Empty));
        assert_eq!(
            TileMap::parse("...\n...\n"),
            Err(MapError::NotSquare { rows: 2, cols: 3 })
        );
        assert_eq!(
            TileMap::parse("..\n."),
            Err(MapError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            TileMap::parse("..\n.x"),
            Err(MapError::UnknownGlyph {
                glyph: 'x',
                pos: Coord::new(1, 1)
            })
        );
    }
}
