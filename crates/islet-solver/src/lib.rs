//! Wave function collapse over an [`islet_core::TileGrid`].
//!
//! [`CollapseSolver`] repeatedly observes the lowest-entropy cell, collapses
//! it with a [`TileRandom`] pick and propagates the consequences through a
//! [`rule::ReductionRule`].

pub use self::{collapse_solver::*, error::*, observe::*, random::*};

mod collapse_solver;
mod error;
mod observe;
mod random;
pub mod rule;

#[cfg(test)]
mod testing;
