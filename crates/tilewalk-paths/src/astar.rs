//! A* fallback search over the node grid.
//!
//! The open and closed lists are plain vectors of grid indices. Membership is
//! tested through the `opened`/`closed` flags on each node, while the lists
//! themselves keep insertion order: the lowest-f scan walks the open list
//! front to back and only a strictly smaller f replaces the candidate, so
//! among equal scores the earliest-inserted node is expanded first.

use tilewalk_core::{Area, Coord, PathOutput, Size, TileSource};

use crate::PathEngine;
use crate::engine::tile;
use crate::error::{PathError, Result};
use crate::node::Walkability;

impl PathEngine {
    /// Run A* from `start` to `stop` and write the route into `out`.
    ///
    /// Tiles of the `arrived` footprint anchored at `stop` count as walkable
    /// for the duration of the search. Node search state and the footprint
    /// overrides are restored before returning, whatever the outcome.
    pub(crate) fn astar<T, O>(
        &mut self,
        tiles: &T,
        start: Coord,
        stop: Coord,
        arrived: Size,
        out: &mut O,
    ) -> Result<()>
    where
        T: TileSource,
        O: PathOutput<T::Tile>,
    {
        let start_idx = self.grid.idx(start).ok_or(PathError::OutOfBounds(start))?;
        let goal_idx = self.grid.idx(stop).ok_or(PathError::OutOfBounds(stop))?;

        self.relax_arrived_area(stop, arrived);
        let searched = self.search(tiles, start_idx, goal_idx);
        let chain = match searched {
            Ok(()) => self.chain_to(start_idx, goal_idx),
            Err(_) => Vec::new(),
        };
        self.reset_search();
        self.restore_arrived_area();

        if let Err(e) = searched {
            log::debug!("no route {} -> {}: {}", start, stop, e);
            return Err(e);
        }

        out.init(tile(tiles, start)?);
        for p in chain {
            out.append(tile(tiles, p)?);
        }
        let len = out.len();
        if len <= 1 {
            return Err(PathError::Degenerate { len });
        }
        log::trace!("searched route {} -> {} ({} tiles)", start, stop, len);
        Ok(())
    }

    /// The search loop proper. Leaves parents and flags in place for
    /// [`chain_to`](Self::chain_to); the caller resets them.
    fn search<T: TileSource>(&mut self, tiles: &T, start_idx: usize, goal_idx: usize) -> Result<()> {
        let max = self.config.max_iterations;
        let goal = self.grid.coord(goal_idx);

        {
            let h = self.config.estimate(self.grid.coord(start_idx), goal);
            let node = &mut self.grid.nodes[start_idx];
            node.g = 0;
            node.h = h;
            node.f = h;
            node.opened = true;
        }
        self.open.push(start_idx);

        let mut iterations = 0;
        loop {
            if iterations >= max {
                return Err(PathError::Exhausted { iterations });
            }
            let Some(k) = self.lowest_open() else {
                return Err(PathError::Exhausted { iterations });
            };

            let ci = self.open[k];
            if ci == goal_idx {
                return Ok(());
            }

            self.open.remove(k);
            self.grid.nodes[ci].opened = false;
            self.grid.nodes[ci].closed = true;
            self.closed.push(ci);

            let cp = self.grid.coord(ci);
            let current_g = self.grid.nodes[ci].g;

            for np in cp.neighbors_8() {
                let Some(ni) = self.grid.idx(np) else {
                    continue;
                };
                if self.grid.nodes[ni].closed || !self.grid.walkable_at(tiles, ni) {
                    continue;
                }

                // No cutting corners: both orthogonal tiles of a diagonal
                // step must be open ground.
                let step = np - cp;
                if step.is_diagonal()
                    && !(self.passable_corner(tiles, cp.shift(0, step.col))
                        && self.passable_corner(tiles, cp.shift(step.row, 0)))
                {
                    continue;
                }

                let tentative_g = current_g.saturating_add(self.config.step_cost(step));
                let h = self.config.estimate(np, goal);
                let n = &mut self.grid.nodes[ni];
                if n.opened {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.opened = true;
                    self.open.push(ni);
                }
                n.parent = Some(ci);
                n.g = tentative_g;
                n.h = h;
                n.f = tentative_g.saturating_add(h);
            }

            iterations += 1;
        }
    }

    /// Position in the open list of the node with the lowest f. Ties go to
    /// the earliest-inserted node.
    fn lowest_open(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (k, &i) in self.open.iter().enumerate() {
            let f = self.grid.nodes[i].f;
            if best.is_none_or(|(_, bf)| f < bf) {
                best = Some((k, f));
            }
        }
        best.map(|(k, _)| k)
    }

    fn passable_corner<T: TileSource>(&self, tiles: &T, p: Coord) -> bool {
        self.grid
            .idx(p)
            .is_some_and(|i| !self.grid.nodes[i].closed && self.grid.walkable_at(tiles, i))
    }

    /// Coordinates from the step after `start_idx` up to `goal_idx`,
    /// following parent links back from the goal.
    fn chain_to(&self, start_idx: usize, goal_idx: usize) -> Vec<Coord> {
        let mut chain = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            let Some(parent) = self.grid.nodes[ci].parent else {
                break;
            };
            chain.push(self.grid.coord(ci));
            ci = parent;
        }
        chain.reverse();
        chain
    }

    /// Clear the search fields of every node the last search touched.
    fn reset_search(&mut self) {
        for &i in self.open.iter().chain(self.closed.iter()) {
            self.grid.nodes[i].reset();
        }
        self.open.clear();
        self.closed.clear();
    }

    /// Force the footprint tiles to walkable, remembering their overrides.
    fn relax_arrived_area(&mut self, stop: Coord, arrived: Size) {
        self.saved.clear();
        let area = Area::anchored(stop, arrived).intersect(self.grid.area());
        for p in area {
            if let Some(i) = self.grid.idx(p) {
                let prev = std::mem::replace(
                    &mut self.grid.nodes[i].walkability,
                    Walkability::AlwaysWalkable,
                );
                self.saved.push((i, prev));
            }
        }
    }

    fn restore_arrived_area(&mut self) {
        for (i, prev) in self.saved.drain(..) {
            self.grid.nodes[i].walkability = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FindOptions, PathConfig, PathMethod};
    use tilewalk_core::{Route, Terrain, TileMap};

    fn engine_for(map: &TileMap) -> PathEngine {
        PathEngine::with_tiles(map, PathConfig::default())
    }

    fn search_only() -> FindOptions {
        FindOptions::default().try_shortcut(false)
    }

    fn assert_idle(engine: &PathEngine) {
        for node in engine.nodes() {
            assert!(!node.is_opened(), "{} left open", node.pos());
            assert!(!node.is_closed(), "{} left closed", node.pos());
            assert!(node.parent().is_none(), "{} kept its parent", node.pos());
        }
        assert!(engine.open.is_empty());
        assert!(engine.closed.is_empty());
        assert!(engine.saved.is_empty());
    }

    #[test]
    fn lowest_open_prefers_earliest_on_ties() {
        let map = TileMap::new(3, Terrain::Grass);
        let mut engine = engine_for(&map);
        for (i, f) in [(4, 30), (1, 20), (7, 20), (2, 25)] {
            engine.grid.nodes[i].f = f;
            engine.open.push(i);
        }
        assert_eq!(engine.lowest_open(), Some(1));

        engine.grid.nodes[2].f = 10;
        assert_eq!(engine.lowest_open(), Some(3));

        engine.open.clear();
        assert_eq!(engine.lowest_open(), None);
    }

    #[test]
    fn diagonal_needs_both_orthogonals() {
        // .#
        // ..
        let map = TileMap::parse(".#\n..").unwrap();
        let mut engine = engine_for(&map);
        let route = engine
            .find_route(&map, Coord::new(0, 0), Coord::new(1, 1), search_only())
            .unwrap();
        assert_eq!(
            route.as_slice(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_idle(&engine);
    }

    #[test]
    fn diagonal_gap_between_two_walls_is_closed() {
        // .#
        // #.
        let map = TileMap::parse(".#\n#.").unwrap();
        let mut engine = engine_for(&map);
        let res = engine.find_route(&map, Coord::new(0, 0), Coord::new(1, 1), search_only());
        assert_eq!(res, Err(PathError::Exhausted { iterations: 1 }));
        assert_idle(&engine);
    }

    #[test]
    fn diagonal_past_a_closed_node_is_rejected() {
        // Open ground, but (0, 1) is already expanded when the search
        // leaves the start, so the start cannot step diagonally to (1, 1).
        let map = TileMap::new(3, Terrain::Grass);
        let mut engine = engine_for(&map);
        let done = engine.grid.idx(Coord::new(0, 1)).unwrap();
        engine.grid.nodes[done].closed = true;
        engine.closed.push(done);

        let route = engine
            .find_route(&map, Coord::new(0, 0), Coord::new(1, 1), search_only())
            .unwrap();
        assert_eq!(
            route.as_slice(),
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_idle(&engine);

        // Once reset, the diagonal is the route again.
        let route = engine
            .find_route(&map, Coord::new(0, 0), Coord::new(1, 1), search_only())
            .unwrap();
        assert_eq!(route.as_slice(), &[Coord::new(0, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn huge_step_costs_saturate() {
        let mut map = TileMap::new(5, Terrain::Grass);
        map.set(Coord::new(2, 2), Terrain::Rock);
        let cfg = PathConfig {
            straight_cost: 1_500_000_000,
            diagonal_cost: 2_000_000_000,
            ..PathConfig::default()
        };
        let mut engine = PathEngine::with_tiles(&map, cfg);
        let start = Coord::new(0, 0);
        let stop = Coord::new(4, 4);
        let mut route = Route::new();
        let method = engine.find_path(&map, start, stop, &mut route, FindOptions::default());
        assert_eq!(method, Ok(PathMethod::Searched));
        assert_eq!(route.start(), Some(start));
        assert_eq!(route.destination(), Some(stop));
        assert_eq!(route.steps().count(), route.len() - 1);
        assert!(!route.contains(Coord::new(2, 2)));
        assert_idle(&engine);
    }

    #[test]
    fn route_is_contiguous_and_avoids_walls() {
        let map = TileMap::parse(
            "\
.......
.#####.
.#...#.
.#.#.#.
.#.#...
...#...
.......",
        )
        .unwrap();
        let mut engine = engine_for(&map);
        let start = Coord::new(2, 2);
        let stop = Coord::new(6, 6);
        let route = engine.find_route(&map, start, stop, FindOptions::default()).unwrap();
        assert_eq!(route.start(), Some(start));
        assert_eq!(route.destination(), Some(stop));
        assert_eq!(route.steps().count(), route.len() - 1);
        for p in &route {
            assert_eq!(map.terrain(*p), Some(Terrain::Grass), "{p} is blocked");
        }
        assert_idle(&engine);
    }

    #[test]
    fn iteration_cap_is_honoured() {
        let mut map = TileMap::new(40, Terrain::Grass);
        let stop = Coord::new(20, 20);
        for p in stop.neighbors_8() {
            map.set(p, Terrain::Rock);
        }
        let mut engine = engine_for(&map);
        let start = Coord::new(0, 0);

        let res = engine.find_route(&map, start, stop, FindOptions::default());
        assert_eq!(res, Err(PathError::Exhausted { iterations: 300 }));
        assert_idle(&engine);

        engine.set_config(PathConfig::default().with_max_iterations(25));
        let res = engine.find_route(&map, start, stop, FindOptions::default());
        assert_eq!(res, Err(PathError::Exhausted { iterations: 25 }));
        assert_idle(&engine);
    }

    #[test]
    fn arrived_area_is_restored_on_failure() {
        let mut map = TileMap::new(6, Terrain::Grass);
        map.fill(Area::new(0, 3, 6, 4), Terrain::Water);
        map.set(Coord::new(2, 5), Terrain::Building);
        let mut engine = engine_for(&map);
        engine
            .set_walkability(Coord::new(3, 5), Walkability::NeverWalkable)
            .unwrap();

        let opts = FindOptions::default().arrived_area(Size::new(1, 2));
        let mut route = Route::new();
        let res = engine.find_path(&map, Coord::new(0, 0), Coord::new(2, 5), &mut route, opts);
        assert!(matches!(res, Err(PathError::Exhausted { .. })));

        assert_eq!(engine.walkability(Coord::new(2, 5)), Some(Walkability::Deferred));
        assert_eq!(engine.walkability(Coord::new(3, 5)), Some(Walkability::NeverWalkable));
        assert!(!engine.is_walkable(&map, Coord::new(2, 5)));
        assert_idle(&engine);
    }

    #[test]
    fn footprint_past_the_map_edge_is_clipped() {
        let mut map = TileMap::new(4, Terrain::Grass);
        map.set(Coord::new(3, 3), Terrain::Building);
        let mut engine = engine_for(&map);
        let opts = search_only().arrived_area(Size::square(3));
        let mut route = Route::new();
        let method = engine.find_path(&map, Coord::new(0, 0), Coord::new(3, 3), &mut route, opts);
        assert_eq!(method, Ok(PathMethod::Searched));
        assert_eq!(route.destination(), Some(Coord::new(3, 3)));
        assert_eq!(engine.walkability(Coord::new(3, 3)), Some(Walkability::Deferred));
        assert_idle(&engine);
    }
}
