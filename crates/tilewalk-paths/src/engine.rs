use tilewalk_core::{Coord, PathOutput, Route, Size, TileSource};

use crate::config::PathConfig;
use crate::error::{PathError, Result};
use crate::grid::NodeGrid;
use crate::line::StraightLine;
use crate::node::{SearchNode, Walkability};

/// Per-query switches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FindOptions {
    /// The destination tile itself must be walkable for the straight line
    /// to count as safe.
    pub check_last: bool,
    /// Try the straight line before falling back to A*.
    pub try_shortcut: bool,
    /// Footprint anchored at the destination whose tiles count as walkable
    /// while the search runs. Empty by default.
    pub arrived_area: Size,
}

impl FindOptions {
    pub fn check_last(mut self, yes: bool) -> Self {
        self.check_last = yes;
        self
    }

    pub fn try_shortcut(mut self, yes: bool) -> Self {
        self.try_shortcut = yes;
        self
    }

    pub fn arrived_area(mut self, size: Size) -> Self {
        self.arrived_area = size;
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            check_last: true,
            try_shortcut: true,
            arrived_area: Size::ZERO,
        }
    }
}

/// Which strategy produced a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathMethod {
    /// Start and destination coincide; the route is the start tile alone.
    Arrived,
    /// The straight line was clear.
    Straight,
    /// A* search.
    Searched,
}

/// Pathfinding context for one map.
///
/// `PathEngine` owns the [`NodeGrid`] cache and the search scratch lists, so
/// repeated queries allocate nothing once warm. Every query borrows the
/// engine mutably: searches over the same engine never overlap. Use one
/// engine per thread when queries must run concurrently.
#[derive(Clone, Debug, Default)]
pub struct PathEngine {
    pub(crate) config: PathConfig,
    pub(crate) grid: NodeGrid,
    // A* scratch, always empty between queries
    pub(crate) open: Vec<usize>,
    pub(crate) closed: Vec<usize>,
    pub(crate) saved: Vec<(usize, Walkability)>,
}

impl PathEngine {
    /// Create an engine with an empty grid. Call [`build`](Self::build)
    /// once the map is available.
    pub fn new(config: PathConfig) -> Self {
        Self {
            config,
            grid: NodeGrid::new(),
            open: Vec::new(),
            closed: Vec::new(),
            saved: Vec::new(),
        }
    }

    /// Create an engine and build its grid from `tiles`.
    pub fn with_tiles<T: TileSource>(tiles: &T, config: PathConfig) -> Self {
        let mut engine = Self::new(config);
        engine.build(tiles);
        engine
    }

    /// Build or extend the node grid to cover `tiles`. Idempotent.
    pub fn build<T: TileSource>(&mut self, tiles: &T) {
        self.grid.build(tiles);
    }

    #[inline]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: PathConfig) {
        self.config = config;
    }

    #[inline]
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// Iterate over all cached nodes in row-major order.
    pub fn nodes(&self) -> std::slice::Iter<'_, SearchNode> {
        self.grid.iter()
    }

    /// The node at `p`; see [`NodeGrid::lookup`].
    #[inline]
    pub fn node(&self, p: Coord) -> &SearchNode {
        self.grid.lookup(p)
    }

    #[inline]
    pub fn exists(&self, p: Coord) -> bool {
        self.grid.exists(p)
    }

    #[inline]
    pub fn is_walkable<T: TileSource>(&self, tiles: &T, p: Coord) -> bool {
        self.grid.is_walkable(tiles, p)
    }

    /// Current walkability override at `p`.
    pub fn walkability(&self, p: Coord) -> Option<Walkability> {
        self.grid.get(p).map(|n| n.walkability())
    }

    /// Set a lasting walkability override at `p`, returning the previous one.
    pub fn set_walkability(&mut self, p: Coord, w: Walkability) -> Result<Walkability> {
        self.grid.set_walkability(p, w).ok_or(PathError::OutOfBounds(p))
    }

    /// The straight line the shortcut would follow.
    pub fn straight_line(&self, start: Coord, stop: Coord) -> StraightLine {
        StraightLine::new(start, stop)
    }

    /// Find a route from `start` to `stop` and write it into `out`.
    ///
    /// The step costs of the engine's [`PathConfig`] must pass
    /// [`PathConfig::validate`] and the start tile must be walkable. When `opts.try_shortcut` is set and
    /// the straight line is clear, that line is the route; otherwise A* runs
    /// with the `opts.arrived_area` footprint relaxed. On success `out`
    /// holds the route from start to destination, both included. On failure
    /// the contents of `out` are unspecified.
    pub fn find_path<T, O>(
        &mut self,
        tiles: &T,
        start: Coord,
        stop: Coord,
        out: &mut O,
        opts: FindOptions,
    ) -> Result<PathMethod>
    where
        T: TileSource,
        O: PathOutput<T::Tile>,
    {
        self.config.validate()?;
        if !self.grid.is_walkable(tiles, start) {
            log::info!("cannot route from {}: start is not walkable", start);
            return Err(PathError::StartUnwalkable(start));
        }
        if !self.grid.exists(stop) {
            log::warn!("cannot route to {}: outside the node grid", stop);
            return Err(PathError::OutOfBounds(stop));
        }

        if start == stop {
            out.init(tile(tiles, start)?);
            return Ok(PathMethod::Arrived);
        }

        if opts.try_shortcut && self.line_is_safe(tiles, start, stop, opts.check_last) {
            out.init(tile(tiles, start)?);
            for p in StraightLine::new(start, stop).skip(1) {
                out.append(tile(tiles, p)?);
            }
            log::trace!("straight route {} -> {} ({} tiles)", start, stop, out.len());
            return Ok(PathMethod::Straight);
        }

        self.astar(tiles, start, stop, opts.arrived_area, out)?;
        Ok(PathMethod::Searched)
    }

    /// Convenience wrapper around [`find_path`](Self::find_path) collecting
    /// into a fresh [`Route`].
    pub fn find_route<T: TileSource>(
        &mut self,
        tiles: &T,
        start: Coord,
        stop: Coord,
        opts: FindOptions,
    ) -> Result<Route> {
        let mut route = Route::new();
        self.find_path(tiles, start, stop, &mut route, opts)?;
        Ok(route)
    }

    /// Whether every tile of the straight line is walkable, the destination
    /// tile excepted unless `check_last` is set.
    fn line_is_safe<T: TileSource>(
        &self,
        tiles: &T,
        start: Coord,
        stop: Coord,
        check_last: bool,
    ) -> bool {
        let line = StraightLine::new(start, stop);
        let checked = if check_last {
            line.len()
        } else {
            line.len().saturating_sub(1)
        };
        line.take(checked).all(|p| self.grid.is_walkable(tiles, p))
    }
}

/// The tile at `p`, which the node grid says exists.
pub(crate) fn tile<T: TileSource>(tiles: &T, p: Coord) -> Result<&T::Tile> {
    tiles.tile(p).ok_or(PathError::OutOfBounds(p))
}
