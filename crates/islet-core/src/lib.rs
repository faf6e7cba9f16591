//! Core data structures for tile map generation.
//!
//! This crate holds the state a wave function collapse run works on. It knows
//! nothing about randomness or constraint rules; those live in `islet-solver`.
//!
//! # Overview
//!
//! - [`tile`]: the closed set of tile kinds and ordered per-cell candidate sets
//! - [`position`]: grid coordinates and the four neighbour directions
//! - [`cell`]: one position's candidates plus its collapsed flag
//! - [`grid`]: the fixed-size, row-major [`TileGrid`] with bounds-checked access
//!
//! # Examples
//!
//! ```
//! use islet_core::{Position, TileCandidates, TileGrid, TileKind};
//!
//! let mut grid = TileGrid::new(2, 2, &TileCandidates::full());
//! for pos in grid.positions().collect::<Vec<_>>() {
//!     grid[pos].collapse_to(TileKind::Land);
//! }
//! assert!(grid.all_collapsed());
//! assert_eq!(grid.count_tile(TileKind::Land), 4);
//! assert_eq!(grid.resolved_tile(Position::new(1, 1)), Some(TileKind::Land));
//! ```

pub mod cell;
pub mod grid;
pub mod position;
pub mod tile;

pub use self::{
    cell::Cell,
    grid::{DirectedNeighbors, GridParseError, Neighbors, TileGrid},
    position::{Direction, Position},
    tile::{TileCandidates, TileKind, TileKindParseError},
};
