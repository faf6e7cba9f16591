use std::fmt::Debug;

use islet_core::{Cell, Direction, TileCandidates};

/// A policy mapping a neighbour's candidates to the candidates it may keep.
///
/// `reduce` receives the neighbour's current candidates, the cell popped from
/// the propagation worklist, and the side of that cell the neighbour lies on.
/// Whatever the rule returns is intersected with the current candidates, so a
/// rule can never add a candidate back.
pub trait ReductionRule: Debug + Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Returns the candidates the neighbour may keep.
    ///
    /// An empty result is a contradiction and aborts the run.
    fn reduce(
        &self,
        candidates: &TileCandidates,
        source: &Cell,
        direction: Direction,
    ) -> TileCandidates;
}

/// A boxed reduction rule.
pub type BoxedRule = Box<dyn ReductionRule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
