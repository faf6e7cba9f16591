//! Cell selection and collapse.

use islet_core::{Position, TileGrid, TileKind};

use crate::TileRandom;

/// Returns the uncollapsed cell with the fewest remaining candidates.
///
/// Cells are scanned in row-major order and only a strictly smaller count
/// replaces the current best, so ties go to the cell met first: top row before
/// lower rows, left before right. Returns `None` once every cell is collapsed.
///
/// # Examples
///
/// ```
/// use islet_core::{Position, TileGrid};
/// use islet_solver::select_lowest_entropy_cell;
///
/// let grid: TileGrid = "
///     ~?l
///     l??
/// "
/// .parse()?;
/// assert_eq!(select_lowest_entropy_cell(&grid), Some(Position::new(2, 0)));
/// # Ok::<(), islet_core::GridParseError>(())
/// ```
#[must_use]
pub fn select_lowest_entropy_cell(grid: &TileGrid) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for (pos, cell) in grid.cells() {
        if cell.is_collapsed() {
            continue;
        }
        let entropy = cell.entropy();
        if best.is_none_or(|(_, min)| entropy < min) {
            best = Some((pos, entropy));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Collapses the cell at `pos` to one of its candidates, chosen uniformly.
///
/// Only the target cell changes. Returns the chosen tile.
///
/// # Panics
///
/// Panics if `pos` is out of bounds or the cell is already collapsed.
#[track_caller]
pub fn collapse<R>(grid: &mut TileGrid, pos: Position, random: &mut R) -> TileKind
where
    R: TileRandom + ?Sized,
{
    let cell = &mut grid[pos];
    assert!(!cell.is_collapsed(), "cell {pos} is already collapsed");
    let candidates = cell.possible_tiles();
    let index = random.pick_index(candidates.len());
    let Some(tile) = candidates.get(index) else {
        unreachable!("pick_index returned {index} for {} candidates", candidates.len());
    };
    cell.collapse_to(tile);
    log::trace!("collapsed {pos} to {tile}");
    tile
}
