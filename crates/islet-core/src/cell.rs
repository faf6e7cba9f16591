//! Per-position state of a generation run.

use crate::{TileCandidates, TileKind};

/// The state of one grid position: its remaining candidates and whether it
/// has been collapsed.
///
/// A cell starts undecided with the full initial candidate list. Reductions
/// shrink the list; [`collapse_to`](Self::collapse_to) fixes it to a single
/// kind and sets the collapsed flag, which never reverts.
///
/// # Examples
///
/// ```
/// use islet_core::{Cell, TileCandidates, TileKind};
///
/// let mut cell = Cell::new(TileCandidates::full());
/// assert_eq!(cell.entropy(), 2);
/// assert_eq!(cell.resolved(), None);
///
/// cell.collapse_to(TileKind::Land);
/// assert!(cell.is_collapsed());
/// assert_eq!(cell.resolved(), Some(TileKind::Land));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    possible_tiles: TileCandidates,
    collapsed: bool,
}

impl Cell {
    /// Creates an undecided cell.
    ///
    /// # Panics
    ///
    /// Panics if `possible_tiles` is empty.
    #[must_use]
    pub fn new(possible_tiles: TileCandidates) -> Self {
        assert!(!possible_tiles.is_empty(), "a cell needs at least one candidate");
        Self {
            possible_tiles,
            collapsed: false,
        }
    }

    /// Creates a cell already collapsed to `kind`.
    #[must_use]
    pub fn collapsed(kind: TileKind) -> Self {
        Self {
            possible_tiles: TileCandidates::single(kind),
            collapsed: true,
        }
    }

    /// Returns the remaining candidates.
    #[must_use]
    #[inline]
    pub fn possible_tiles(&self) -> &TileCandidates {
        &self.possible_tiles
    }

    /// Returns `true` once the cell has been collapsed.
    #[must_use]
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns the number of remaining candidates.
    #[must_use]
    #[inline]
    pub fn entropy(&self) -> usize {
        self.possible_tiles.len()
    }

    /// Returns the tile this cell collapsed to.
    ///
    /// Undecided cells return `None`, even when a single candidate is left.
    #[must_use]
    pub fn resolved(&self) -> Option<TileKind> {
        if self.collapsed {
            self.possible_tiles.as_single()
        } else {
            None
        }
    }

    /// Fixes the cell to `kind` and marks it collapsed.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already collapsed.
    #[track_caller]
    pub fn collapse_to(&mut self, kind: TileKind) {
        assert!(!self.collapsed, "cell is already collapsed");
        self.possible_tiles = TileCandidates::single(kind);
        self.collapsed = true;
    }

    /// Replaces the candidates of an undecided cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is collapsed or `possible_tiles` is empty.
    pub fn restrict(&mut self, possible_tiles: TileCandidates) {
        assert!(!self.collapsed, "cannot restrict a collapsed cell");
        assert!(!possible_tiles.is_empty(), "a cell needs at least one candidate");
        self.possible_tiles = possible_tiles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_undecided() {
        let cell = Cell::new(TileCandidates::full());
        assert!(!cell.is_collapsed());
        assert_eq!(cell.entropy(), 2);
        assert_eq!(cell.resolved(), None);
    }

    #[test]
    fn test_single_candidate_is_not_resolved_until_collapsed() {
        let mut cell = Cell::new(TileCandidates::single(TileKind::Water));
        assert_eq!(cell.resolved(), None);
        cell.collapse_to(TileKind::Water);
        assert_eq!(cell.resolved(), Some(TileKind::Water));
    }

    #[test]
    fn test_restrict_shrinks_candidates() {
        let mut cell = Cell::new(TileCandidates::full());
        cell.restrict(TileCandidates::single(TileKind::Land));
        assert_eq!(cell.entropy(), 1);
        assert!(!cell.is_collapsed());
    }

    #[test]
    #[should_panic(expected = "cannot restrict a collapsed cell")]
    fn test_restrict_collapsed_panics() {
        let mut cell = Cell::collapsed(TileKind::Land);
        cell.restrict(TileCandidates::single(TileKind::Land));
    }

    #[test]
    #[should_panic(expected = "cell is already collapsed")]
    fn test_collapse_collapsed_panics() {
        let mut cell = Cell::new(TileCandidates::full());
        cell.collapse_to(TileKind::Water);
        cell.collapse_to(TileKind::Land);
    }

    #[test]
    #[should_panic(expected = "cell is already collapsed")]
    fn test_collapse_prebuilt_collapsed_panics() {
        let mut cell = Cell::collapsed(TileKind::Land);
        cell.collapse_to(TileKind::Land);
    }

    #[test]
    #[should_panic(expected = "a cell needs at least one candidate")]
    fn test_empty_candidates_panic() {
        let _ = Cell::new(TileCandidates::empty());
    }
}
