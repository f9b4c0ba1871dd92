//! Map-side collaborators of the path engine.
//!
//! The engine never owns tiles. It borrows a [`TileSource`] for the duration
//! of each call and writes the route it finds into a [`PathOutput`].

use crate::geom::Coord;

/// A single map tile as seen by the path engine.
pub trait Tile {
    /// Position of the tile on its map.
    fn pos(&self) -> Coord;

    /// Whether an agent may stand on or cross this tile.
    fn is_walkable(&self) -> bool;
}

/// A square map that hands out tiles by coordinate.
pub trait TileSource {
    type Tile: Tile;

    /// Side length of the square map.
    fn extent(&self) -> i32;

    /// The tile at `pos`, or `None` outside the map.
    fn tile(&self, pos: Coord) -> Option<&Self::Tile>;
}

/// Ordered tile sequence a route is written into.
pub trait PathOutput<T: Tile> {
    /// Reset the container so it holds only `start`.
    fn init(&mut self, start: &T);

    /// Append one step.
    fn append(&mut self, tile: &T);

    /// Number of tiles held, start included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
