use islet_core::{Cell, Direction, TileCandidates};

use super::{BoxedRule, ReductionRule};

const NAME: &str = "permissive";

/// A rule that accepts every neighbour combination.
///
/// Water and land may border each other freely, so propagation never shrinks a
/// neighbour and each propagation drains after popping its origin.
///
/// # Examples
///
/// ```
/// use islet_core::{Cell, Direction, TileCandidates, TileKind};
/// use islet_solver::rule::{PermissiveRule, ReductionRule};
///
/// let rule = PermissiveRule::new();
/// let reduced = rule.reduce(
///     &TileCandidates::full(),
///     &Cell::collapsed(TileKind::Water),
///     Direction::Right,
/// );
/// assert_eq!(reduced, TileCandidates::full());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveRule;

impl PermissiveRule {
    /// Creates a new `PermissiveRule`.
    #[must_use]
    pub const fn new() -> Self {
        PermissiveRule
    }
}

impl ReductionRule for PermissiveRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn reduce(
        &self,
        candidates: &TileCandidates,
        _source: &Cell,
        _direction: Direction,
    ) -> TileCandidates {
        candidates.clone()
    }
}

#[cfg(test)]
mod tests {
    use islet_core::{Position, TileKind};

    use super::*;
    use crate::testing::GridTester;

    #[test]
    fn test_keeps_every_candidate() {
        let rule = PermissiveRule::new();
        for kind in TileKind::ALL {
            for direction in Direction::ALL {
                let reduced =
                    rule.reduce(&TileCandidates::full(), &Cell::collapsed(kind), direction);
                assert_eq!(reduced, TileCandidates::full());
            }
        }
    }

    #[test]
    fn test_propagation_drains_in_one_pop() {
        GridTester::from_str(
            "
            ???
            ?~?
            ???
        ",
        )
        .propagate_from(&PermissiveRule::new(), Position::new(1, 1))
        .assert_pops(1)
        .assert_reductions(0)
        .assert_no_change(Position::new(0, 1))
        .assert_no_change(Position::new(1, 0))
        .assert_no_change(Position::new(2, 1))
        .assert_no_change(Position::new(1, 2));
    }
}
