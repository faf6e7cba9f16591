use std::{fmt, sync::Arc};

use islet_core::{Cell, Direction, TileCandidates};

use super::{BoxedRule, ReductionRule};

type ReduceFn = dyn Fn(&TileCandidates, &Cell, Direction) -> TileCandidates + Send + Sync;

/// A rule backed by a closure.
///
/// Lets callers wire in their own adjacency constraints without declaring a
/// type. Clones share the closure.
///
/// # Examples
///
/// ```
/// use islet_core::{Cell, Direction, TileCandidates, TileKind};
/// use islet_solver::rule::{FnRule, ReductionRule};
///
/// // Water only borders water.
/// let rule = FnRule::new("water island", |candidates: &TileCandidates, source: &Cell, _| {
///     if source.possible_tiles().as_single() == Some(TileKind::Water) {
///         candidates.filter(|kind| kind == TileKind::Water)
///     } else {
///         candidates.clone()
///     }
/// });
///
/// let reduced = rule.reduce(
///     &TileCandidates::full(),
///     &Cell::collapsed(TileKind::Water),
///     Direction::Up,
/// );
/// assert_eq!(reduced, TileCandidates::single(TileKind::Water));
/// ```
#[derive(Clone)]
pub struct FnRule {
    name: &'static str,
    reduce: Arc<ReduceFn>,
}

impl FnRule {
    /// Creates a rule named `name` that delegates to `reduce`.
    pub fn new<F>(name: &'static str, reduce: F) -> Self
    where
        F: Fn(&TileCandidates, &Cell, Direction) -> TileCandidates + Send + Sync + 'static,
    {
        Self {
            name,
            reduce: Arc::new(reduce),
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ReductionRule for FnRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(self.clone())
    }

    fn reduce(
        &self,
        candidates: &TileCandidates,
        source: &Cell,
        direction: Direction,
    ) -> TileCandidates {
        (self.reduce)(candidates, source, direction)
    }
}

#[cfg(test)]
mod tests {
    use islet_core::TileKind;

    use super::*;

    #[test]
    fn test_delegates_to_closure() {
        let rule = FnRule::new("no land", |candidates: &TileCandidates, _: &Cell, _| {
            candidates.filter(|kind| kind != TileKind::Land)
        });
        assert_eq!(rule.name(), "no land");
        let reduced = rule.reduce(
            &TileCandidates::full(),
            &Cell::collapsed(TileKind::Water),
            Direction::Down,
        );
        assert_eq!(reduced, TileCandidates::single(TileKind::Water));
    }

    #[test]
    fn test_clone_box_keeps_name() {
        let rule =
            FnRule::new("same", |candidates: &TileCandidates, _: &Cell, _| candidates.clone());
        assert_eq!(rule.clone_box().name(), "same");
        assert!(format!("{rule:?}").contains("same"));
    }
}
