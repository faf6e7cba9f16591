//! Constraint-reduction rules.
//!
//! A rule decides which candidates of a neighbouring cell survive next to a
//! cell whose state just changed. The propagation worklist in
//! [`CollapseSolver`](crate::CollapseSolver) is rule-agnostic; swapping the
//! rule is the only change needed to add real adjacency constraints.

pub use self::{closure::FnRule, permissive::PermissiveRule, traits::*};

mod closure;
mod permissive;
mod traits;
