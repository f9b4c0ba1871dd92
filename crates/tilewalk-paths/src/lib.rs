//! Walkable routes across a tile map.
//!
//! A [`PathEngine`] caches one [`SearchNode`] per map tile in a [`NodeGrid`]
//! and answers route queries between two tiles in two stages:
//!
//! - **Straight line** — the 8-way line from start to destination
//!   ([`StraightLine`]) is taken as is when every tile on it is walkable.
//!   This costs one step per tile and skips the search entirely.
//! - **A\*** — otherwise a bounded A* search runs over the grid, with no
//!   corner cutting and an optional destination footprint whose tiles count
//!   as walkable for that search only.
//!
//! Search bookkeeping lives on the cached nodes and is cleared after every
//! query, so one engine serves any number of sequential queries. Queries
//! take `&mut PathEngine`; the borrow checker keeps them from overlapping.
//!
//! ```
//! use tilewalk_core::{Coord, TileMap};
//! use tilewalk_paths::{FindOptions, PathConfig, PathEngine, PathMethod};
//!
//! let map = TileMap::parse("...\n.#.\n...").unwrap();
//! let mut engine = PathEngine::with_tiles(&map, PathConfig::default());
//!
//! let mut route = tilewalk_core::Route::new();
//! let method = engine
//!     .find_path(&map, Coord::new(0, 0), Coord::new(2, 2), &mut route, FindOptions::default())
//!     .unwrap();
//! assert_eq!(method, PathMethod::Searched);
//! assert!(!route.contains(Coord::new(1, 1)));
//! ```

mod astar;
mod config;
mod distance;
mod engine;
mod error;
mod grid;
mod line;
mod node;

pub use config::PathConfig;
pub use distance::{chebyshev, manhattan, octile};
pub use engine::{FindOptions, PathEngine, PathMethod};
pub use error::{PathError, Result};
pub use grid::NodeGrid;
pub use line::StraightLine;
pub use node::{SearchNode, Walkability};
