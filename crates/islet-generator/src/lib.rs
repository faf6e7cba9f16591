//! Tile map generation sessions.
//!
//! A [`GenerationSession`] owns one map being collapsed: its grid, seeded
//! random source, solver statistics and the decorations placed once the grid
//! is complete. It can be driven one step at a time or run to completion, and
//! [`GenerationSession::regenerate`] restarts it with a new seed while
//! cancelling the run in progress.
//!
//! [`MapGenerator`] is the one-shot front end for producing whole maps.
//!
//! # Examples
//!
//! ```
//! use islet_generator::{MapConfig, MapGenerator, MapSeed};
//! use islet_solver::CollapseSolver;
//!
//! let solver = CollapseSolver::permissive();
//! let generator = MapGenerator::new(&solver, MapConfig::default());
//! let map = generator.generate_with_seed(MapSeed::from_phrase("islet"))?;
//!
//! assert!(map.grid.all_collapsed());
//! assert_eq!((map.grid.width(), map.grid.height()), (20, 15));
//! # Ok::<(), islet_solver::SolverError>(())
//! ```

pub use self::{config::*, decoration::*, generator::*, seed::*, session::*, snapshot::*};

mod config;
mod decoration;
mod generator;
mod seed;
mod session;
mod snapshot;
