//! [`Route`] — the ordered tile sequence produced by a path query.

use crate::direction::Direction;
use crate::geom::Coord;
use crate::tiles::{PathOutput, Tile};

/// An ordered walk across the map, start tile first.
///
/// `Route` is the stock [`PathOutput`]: it accepts tiles from any map and
/// remembers their coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    tiles: Vec<Coord>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a route directly from coordinates.
    pub fn from_coords(tiles: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// First tile, where the walk begins.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.tiles.first().copied()
    }

    /// Last tile, where the walk ends.
    #[inline]
    pub fn destination(&self) -> Option<Coord> {
        self.tiles.last().copied()
    }

    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.tiles.contains(&p)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.tiles.iter()
    }

    /// Direction of each step. Yields `len() - 1` items for a route of
    /// adjacent tiles; a pair of non-adjacent tiles ends the iteration.
    pub fn steps(&self) -> impl Iterator<Item = Direction> + '_ {
        self.tiles
            .windows(2)
            .map_while(|w| Direction::from_delta(w[1] - w[0]))
    }

    /// The same walk travelled backwards.
    pub fn reversed(&self) -> Route {
        let mut tiles = self.tiles.clone();
        tiles.reverse();
        Route { tiles }
    }
}

impl<T: Tile> PathOutput<T> for Route {
    fn init(&mut self, start: &T) {
        self.tiles.clear();
        self.tiles.push(start.pos());
    }

    fn append(&mut self, tile: &T) {
        self.tiles.push(tile.pos());
    }

    fn len(&self) -> usize {
        self.tiles.len()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Terrain, TileMap};
    use crate::tiles::TileSource;

    #[test]
    fn init_resets_and_append_extends() {
        let map = TileMap::new(3, Terrain::Grass);
        let mut route = Route::from_coords([Coord::new(2, 2), Coord::new(2, 1)]);
        let tile = |r, c| map.tile(Coord::new(r, c)).unwrap();

        route.init(tile(0, 0));
        assert_eq!(route.as_slice(), &[Coord::new(0, 0)]);
        route.append(tile(1, 1));
        route.append(tile(1, 2));
        assert_eq!(PathOutput::<crate::map::MapTile>::len(&route), 3);
        assert_eq!(route.start(), Some(Coord::new(0, 0)));
        assert_eq!(route.destination(), Some(Coord::new(1, 2)));
        assert!(route.contains(Coord::new(1, 1)));
    }

    #[test]
    fn steps_follow_directions() {
        let route = Route::from_coords([
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(0, 2),
        ]);
        let steps: Vec<_> = route.steps().collect();
        assert_eq!(
            steps,
            vec![Direction::SouthEast, Direction::East, Direction::North]
        );
        let back: Vec<_> = route.reversed().steps().collect();
        assert_eq!(
            back,
            vec![Direction::South, Direction::West, Direction::NorthWest]
        );
    }

    #[test]
    fn empty_route() {
        let route = Route::new();
        assert!(route.is_empty());
        assert_eq!(route.start(), None);
        assert_eq!(route.steps().count(), 0);
    }
}
