use tilewalk_core::{Coord, Tile, TileSource};

/// How a node decides whether it can be walked on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Walkability {
    /// Walkable whatever the tile says.
    AlwaysWalkable,
    /// Blocked whatever the tile says.
    NeverWalkable,
    /// Ask the underlying tile.
    #[default]
    Deferred,
}

/// Per-tile record of the node grid.
///
/// The position and walkability override live as long as the grid. The
/// search fields (`parent`, scores, `opened`, `closed`) belong to a single
/// search and are back at their initial values whenever no search is
/// running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pos: Coord,
    valid: bool,
    pub(crate) walkability: Walkability,
    pub(crate) parent: Option<usize>,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) opened: bool,
    pub(crate) closed: bool,
}

/// Placeholder handed out for coordinates outside the grid.
pub(crate) static SENTINEL: SearchNode = SearchNode::sentinel();

impl SearchNode {
    pub(crate) const fn new(pos: Coord) -> Self {
        Self {
            pos,
            valid: true,
            walkability: Walkability::Deferred,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
            opened: false,
            closed: false,
        }
    }

    const fn sentinel() -> Self {
        Self {
            valid: false,
            walkability: Walkability::NeverWalkable,
            ..Self::new(Coord::new(-1, -1))
        }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    /// `false` only for the out-of-range placeholder.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn walkability(&self) -> Walkability {
        self.walkability
    }

    /// Grid index of the predecessor on the current best route.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn g_score(&self) -> i32 {
        self.g
    }

    #[inline]
    pub fn h_score(&self) -> i32 {
        self.h
    }

    #[inline]
    pub fn f_score(&self) -> i32 {
        self.f
    }

    #[inline]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Effective walkability: the override, or the tile's own answer when
    /// deferred. A tile missing from `tiles` is not walkable.
    pub fn is_walkable<T: TileSource>(&self, tiles: &T) -> bool {
        match self.walkability {
            Walkability::AlwaysWalkable => true,
            Walkability::NeverWalkable => false,
            Walkability::Deferred => tiles.tile(self.pos).is_some_and(|t| t.is_walkable()),
        }
    }

    /// Clear the search fields.
    pub(crate) fn reset(&mut self) {
        self.parent = None;
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.opened = false;
        self.closed = false;
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        !self.opened && !self.closed && self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilewalk_core::{Terrain, TileMap};

    #[test]
    fn override_beats_tile() {
        let mut map = TileMap::new(2, Terrain::Grass);
        map.set(Coord::new(1, 1), Terrain::Rock);

        let mut open = SearchNode::new(Coord::new(0, 0));
        let mut rock = SearchNode::new(Coord::new(1, 1));
        assert!(open.is_walkable(&map));
        assert!(!rock.is_walkable(&map));

        rock.walkability = Walkability::AlwaysWalkable;
        open.walkability = Walkability::NeverWalkable;
        assert!(rock.is_walkable(&map));
        assert!(!open.is_walkable(&map));
    }

    #[test]
    fn deferred_off_map_is_blocked() {
        let map = TileMap::new(2, Terrain::Grass);
        assert!(!SearchNode::new(Coord::new(5, 5)).is_walkable(&map));
    }

    #[test]
    fn sentinel_is_inert() {
        let map = TileMap::new(2, Terrain::Grass);
        assert!(!SENTINEL.is_valid());
        assert!(!SENTINEL.is_walkable(&map));
        assert_eq!(SENTINEL.parent(), None);
        assert!(SENTINEL.is_idle());
    }

    #[test]
    fn reset_restores_idle_state() {
        let mut n = SearchNode::new(Coord::new(0, 0));
        n.parent = Some(3);
        n.g = 10;
        n.h = 4;
        n.f = 14;
        n.opened = true;
        n.closed = true;
        n.walkability = Walkability::AlwaysWalkable;
        n.reset();
        assert!(n.is_idle());
        assert_eq!(n.f_score(), 0);
        // The override is not search state.
        assert_eq!(n.walkability(), Walkability::AlwaysWalkable);
    }
}
