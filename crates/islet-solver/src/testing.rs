//! Test utilities for solver internals.
//!
//! [`GridTester`] runs a single propagation over a grid written in the text
//! format of [`TileGrid`] and checks what changed. [`ScriptedRandom`] replays a
//! fixed list of picks so collapse order can be pinned down exactly.

use std::{collections::VecDeque, str::FromStr as _};

use islet_core::{Position, TileCandidates, TileGrid, TileKind};

use crate::{CollapseSolver, PropagationReport, rule::ReductionRule};

/// A test harness for propagation.
///
/// Keeps the initial and current grid so assertions can compare before and
/// after. Every method returns `self` for chaining, and assertions report the
/// caller's location through `#[track_caller]`.
#[derive(Debug)]
pub struct GridTester {
    initial: TileGrid,
    current: TileGrid,
    report: PropagationReport,
}

impl GridTester {
    /// Creates a tester from an initial grid.
    pub fn new(initial: TileGrid) -> Self {
        let current = initial.clone();
        Self {
            initial,
            current,
            report: PropagationReport::default(),
        }
    }

    /// Creates a tester from a grid string.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(TileGrid::from_str(s).unwrap())
    }

    /// Propagates from `origin` with `rule` and records the report.
    ///
    /// # Panics
    ///
    /// Panics if propagation hits a contradiction.
    #[track_caller]
    pub fn propagate_from<R>(mut self, rule: &R, origin: Position) -> Self
    where
        R: ReductionRule,
    {
        let solver = CollapseSolver::new(rule.clone_box());
        self.report = solver.propagate(&mut self.current, origin).unwrap();
        self
    }

    /// Asserts the number of worklist pops.
    #[track_caller]
    pub fn assert_pops(self, expected: usize) -> Self {
        assert_eq!(
            self.report.pops, expected,
            "Expected {expected} pops, but propagation popped {}",
            self.report.pops
        );
        self
    }

    /// Asserts the number of reduced neighbours.
    #[track_caller]
    pub fn assert_reductions(self, expected: usize) -> Self {
        assert_eq!(
            self.report.reductions, expected,
            "Expected {expected} reductions, but propagation made {}",
            self.report.reductions
        );
        self
    }

    /// Asserts that a cell's candidates are exactly `kinds`, in order.
    #[track_caller]
    pub fn assert_candidates<C>(self, pos: Position, kinds: C) -> Self
    where
        C: IntoIterator<Item = TileKind>,
    {
        let expected = TileCandidates::from_kinds(kinds);
        let current = self.current[pos].possible_tiles();
        assert_eq!(
            current, &expected,
            "Expected candidates {expected:?} at {pos}, but found {current:?}"
        );
        self
    }

    /// Asserts that a cell was not marked collapsed by propagation.
    #[track_caller]
    pub fn assert_undecided(self, pos: Position) -> Self {
        assert!(
            !self.current[pos].is_collapsed(),
            "Expected {pos} to stay uncollapsed, but it is {:?}",
            self.current[pos]
        );
        self
    }

    /// Asserts that a cell is unchanged.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = &self.initial[pos];
        let current = &self.current[pos];
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but cell changed from {initial:?} to {current:?}"
        );
        self
    }
}

/// A [`TileRandom`](crate::TileRandom) that replays fixed picks.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Creates a source that returns `picks` in order.
    pub fn new<I>(picks: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Returns `true` once every pick has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.picks.is_empty()
    }
}

impl crate::TileRandom for ScriptedRandom {
    #[track_caller]
    fn pick_index(&mut self, len: usize) -> usize {
        let Some(index) = self.picks.pop_front() else {
            panic!("scripted random ran out of picks (asked for one of {len})");
        };
        assert!(index < len, "scripted pick {index} is out of range 0..{len}");
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TileRandom as _, rule::PermissiveRule};

    #[test]
    fn test_scripted_random_replays_in_order() {
        let mut random = ScriptedRandom::new([1, 0, 2]);
        assert_eq!(random.pick_index(2), 1);
        assert_eq!(random.pick_index(2), 0);
        assert!(!random.is_exhausted());
        assert_eq!(random.pick_index(3), 2);
        assert!(random.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "ran out of picks")]
    fn test_scripted_random_panics_when_exhausted() {
        let mut random = ScriptedRandom::new([]);
        let _ = random.pick_index(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_random_rejects_out_of_range() {
        let mut random = ScriptedRandom::new([2]);
        let _ = random.pick_index(2);
    }

    #[test]
    fn test_tester_tracks_report() {
        GridTester::from_str("~?")
            .propagate_from(&PermissiveRule::new(), Position::new(0, 0))
            .assert_pops(1)
            .assert_reductions(0)
            .assert_no_change(Position::new(1, 0))
            .assert_candidates(Position::new(1, 0), [TileKind::Water, TileKind::Land])
            .assert_undecided(Position::new(1, 0));
    }

    #[test]
    #[should_panic(expected = "Expected no change")]
    fn test_tester_detects_change() {
        let mut tester = GridTester::from_str("??");
        tester.current[Position::new(0, 0)].collapse_to(TileKind::Land);
        let _ = tester.assert_no_change(Position::new(0, 0));
    }
}
