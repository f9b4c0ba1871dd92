use tilewalk_core::{Area, Coord, TileSource};

use crate::node::{SENTINEL, SearchNode, Walkability};

/// Dense cache of [`SearchNode`]s, one per map tile, in row-major order.
///
/// The grid is built once from a map and reused by every query. Rebuilding
/// from a larger map keeps the existing nodes and only fills the gaps.
#[derive(Clone, Debug, Default)]
pub struct NodeGrid {
    size: i32,
    pub(crate) nodes: Vec<SearchNode>,
}

impl NodeGrid {
    /// An empty grid. Every lookup misses until [`build`](Self::build).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid covering `tiles`.
    pub fn from_tiles<T: TileSource>(tiles: &T) -> Self {
        let mut grid = Self::new();
        grid.build(tiles);
        grid
    }

    /// Create a node for every coordinate of `tiles` that has none yet.
    ///
    /// Existing nodes, and their walkability overrides, are left untouched,
    /// so calling this again with the same map is a no-op.
    pub fn build<T: TileSource>(&mut self, tiles: &T) {
        let size = tiles.extent().max(0);
        if size <= self.size {
            return;
        }

        let mut old = std::mem::take(&mut self.nodes);
        let mut nodes = Vec::with_capacity((size as usize) * (size as usize));
        for pos in Area::square(size) {
            let node = match self.idx(pos) {
                Some(i) => std::mem::replace(&mut old[i], SearchNode::new(pos)),
                None => SearchNode::new(pos),
            };
            nodes.push(node);
        }

        log::debug!(
            "node grid grown from {0}x{0} to {1}x{1}",
            self.size,
            size
        );
        self.nodes = nodes;
        self.size = size;
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The covered area, `[0, size) × [0, size)`.
    #[inline]
    pub fn area(&self) -> Area {
        Area::square(self.size)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if !self.area().contains(p) {
            return None;
        }
        Some((p.row * self.size + p.col) as usize)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let size = self.size as usize;
        Coord::new((idx / size) as i32, (idx % size) as i32)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn exists(&self, p: Coord) -> bool {
        self.area().contains(p)
    }

    /// The node at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Coord) -> Option<&SearchNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// The node at `p`. Outside the grid this logs a warning and returns a
    /// shared placeholder that is never walkable and has no parent.
    pub fn lookup(&self, p: Coord) -> &SearchNode {
        match self.get(p) {
            Some(node) => node,
            None => {
                log::warn!("no node at {} on a {}x{} grid", p, self.size, self.size);
                &SENTINEL
            }
        }
    }

    /// The predecessor of `node` on the route being searched.
    pub fn parent_of(&self, node: &SearchNode) -> Option<&SearchNode> {
        node.parent.and_then(|i| self.nodes.get(i))
    }

    /// Whether `p` lies inside the grid and its node is walkable.
    #[inline]
    pub fn is_walkable<T: TileSource>(&self, tiles: &T, p: Coord) -> bool {
        self.get(p).is_some_and(|n| n.is_walkable(tiles))
    }

    #[inline]
    pub(crate) fn walkable_at<T: TileSource>(&self, tiles: &T, idx: usize) -> bool {
        self.nodes[idx].is_walkable(tiles)
    }

    /// Replace the walkability override at `p`, returning the previous one.
    /// Returns `None`, changing nothing, outside the grid.
    pub fn set_walkability(&mut self, p: Coord, w: Walkability) -> Option<Walkability> {
        let i = self.idx(p)?;
        Some(std::mem::replace(&mut self.nodes[i].walkability, w))
    }

    /// Iterate over all nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }
}
