//! **tilewalk-core** — map-side types for tile pathfinding.
//!
//! This crate provides the geometry shared across the *tilewalk* crates, the
//! traits the path engine consumes ([`TileSource`], [`Tile`]) and produces
//! into ([`PathOutput`]), and concrete implementations of both: a square
//! [`TileMap`] and a [`Route`].

pub mod direction;
pub mod geom;
pub mod map;
pub mod route;
pub mod tiles;

pub use direction::Direction;
pub use geom::{Area, AreaIter, Coord, Size};
pub use map::{MapError, MapTile, Terrain, TileMap};
pub use route::Route;
pub use tiles::{PathOutput, Tile, TileSource};
