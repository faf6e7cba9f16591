//! The cell grid a generation run works on.

use std::{
    fmt::{self, Display, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Cell, Direction, Position, TileCandidates, TileKind};

/// In-bounds neighbours of a cell, in [`Direction::ALL`] order.
pub type Neighbors = ArrayVec<[Position; 4]>;

/// In-bounds neighbours of a cell with the side each one lies on.
pub type DirectedNeighbors = ArrayVec<[(Direction, Position); 4]>;

/// A fixed-size grid of [`Cell`]s stored in row-major order.
///
/// Dimensions are set at construction and never change; regeneration replaces
/// the whole grid. Every accessor taking a [`Position`] treats an out-of-bounds
/// position as a programming error and panics.
///
/// # Text form
///
/// [`Display`] and [`FromStr`] use one line per row and one character per cell:
///
/// | char | cell |
/// |---|---|
/// | `~` | collapsed to water |
/// | `.` | collapsed to land |
/// | `w` | undecided, only water left |
/// | `l` | undecided, only land left |
/// | `?` | undecided, water and land left |
///
/// Whitespace inside a row is ignored and blank lines are skipped. The text form
/// does not record candidate order; parsed `?` cells use [`TileKind::ALL`] order.
///
/// # Examples
///
/// ```
/// use islet_core::{Position, TileCandidates, TileGrid, TileKind};
///
/// let mut grid = TileGrid::new(3, 2, &TileCandidates::full());
/// assert!(!grid.all_collapsed());
///
/// grid[Position::new(0, 0)].collapse_to(TileKind::Water);
/// assert_eq!(grid.to_string(), "~??\n???");
///
/// let neighbors = grid.neighbors_of(Position::new(1, 0));
/// assert_eq!(
///     neighbors.as_slice(),
///     [Position::new(0, 0), Position::new(2, 0), Position::new(1, 1)]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Allocates a `width` × `height` grid of undecided cells.
    ///
    /// Every cell receives its own copy of `initial_possibilities`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `initial_possibilities` is empty.
    #[must_use]
    pub fn new(width: usize, height: usize, initial_possibilities: &TileCandidates) -> Self {
        assert!(width > 0, "grid width must be positive");
        assert!(height > 0, "grid height must be positive");
        let cell = Cell::new(initial_possibilities.clone());
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    #[inline]
    #[track_caller]
    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {}x{} grid",
            self.width,
            self.height
        );
        pos.y() * self.width + pos.x()
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn get(&self, pos: Position) -> &Cell {
        &self.cells[self.index_of(pos)]
    }

    /// Returns the cell at `pos` for mutation.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn get_mut(&mut self, pos: Position) -> &mut Cell {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }

    /// Returns the tile the cell at `pos` collapsed to, if any.
    #[must_use]
    #[track_caller]
    pub fn resolved_tile(&self, pos: Position) -> Option<TileKind> {
        self.get(pos).resolved()
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Position::new(i % width, i / width))
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, &Cell)> + '_ {
        self.positions().zip(&self.cells)
    }

    /// Returns the in-bounds neighbours of `pos`: left, right, up, down.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn neighbors_of(&self, pos: Position) -> Neighbors {
        self.neighbors_with_direction(pos)
            .into_iter()
            .map(|(_, neighbor)| neighbor)
            .collect()
    }

    /// Returns the in-bounds neighbours of `pos` together with the side of
    /// `pos` each one lies on, in [`Direction::ALL`] order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn neighbors_with_direction(&self, pos: Position) -> DirectedNeighbors {
        let _ = self.index_of(pos);
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                pos.offset(direction)
                    .filter(|neighbor| self.contains(*neighbor))
                    .map(|neighbor| (direction, neighbor))
            })
            .collect()
    }

    /// Returns `true` if every cell is collapsed.
    ///
    /// Scans the whole grid on each call.
    #[must_use]
    pub fn all_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Returns the number of collapsed cells.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Returns the number of cells collapsed to `kind`.
    #[must_use]
    pub fn count_tile(&self, kind: TileKind) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.resolved() == Some(kind))
            .count()
    }

    /// Returns the sum of candidate counts over all cells.
    ///
    /// Propagation can only push a cell when this value drops, so it bounds the
    /// amount of work a single propagation performs.
    #[must_use]
    pub fn candidate_mass(&self) -> usize {
        self.cells.iter().map(Cell::entropy).sum()
    }

    fn cell_char(cell: &Cell) -> char {
        if let Some(kind) = cell.resolved() {
            return kind.glyph();
        }
        match cell.possible_tiles().as_single() {
            Some(kind) => kind.determined_glyph(),
            None => '?',
        }
    }
}

impl Index<Position> for TileGrid {
    type Output = Cell;

    #[track_caller]
    fn index(&self, pos: Position) -> &Self::Output {
        self.get(pos)
    }
}

impl IndexMut<Position> for TileGrid {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        self.get_mut(pos)
    }
}

impl Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(Self::cell_char(cell))?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`TileGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contained no rows.
    #[display("grid text contains no rows")]
    Empty,
    /// A row had a different number of cells than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        found: usize,
    },
    /// A character did not name a cell state.
    #[display("invalid cell character {ch:?} at ({x}, {y})")]
    InvalidCell {
        /// The rejected character.
        ch: char,
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
    },
}

fn parse_cell(ch: char) -> Option<Cell> {
    if let Some(kind) = TileKind::from_glyph(ch) {
        return Some(Cell::collapsed(kind));
    }
    if ch == '?' {
        return Some(Cell::new(TileCandidates::full()));
    }
    TileKind::ALL
        .into_iter()
        .find(|kind| kind.determined_glyph() == ch)
        .map(|kind| Cell::new(TileCandidates::single(kind)))
}

impl FromStr for TileGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for line in s.lines() {
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect::<Vec<_>>();
            if row.is_empty() {
                continue;
            }
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridParseError::RaggedRow {
                    row: height,
                    expected,
                    found: row.len(),
                });
            }
            for (x, ch) in row.into_iter().enumerate() {
                let cell = parse_cell(ch).ok_or(GridParseError::InvalidCell { ch, x, y: height })?;
                cells.push(cell);
            }
            height += 1;
        }
        let width = width.ok_or(GridParseError::Empty)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn full_grid(width: usize, height: usize) -> TileGrid {
        TileGrid::new(width, height, &TileCandidates::full())
    }

    #[test]
    fn test_new_grid_is_uncollapsed() {
        let grid = full_grid(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.collapsed_count(), 0);
        assert!(!grid.all_collapsed());
        for (_, cell) in grid.cells() {
            assert_eq!(cell.possible_tiles(), &TileCandidates::full());
        }
    }

    #[test]
    fn test_cells_do_not_share_candidates() {
        let mut grid = full_grid(2, 2);
        grid[Position::new(0, 0)].restrict(TileCandidates::single(TileKind::Land));
        assert_eq!(grid[Position::new(0, 0)].entropy(), 1);
        assert_eq!(grid[Position::new(1, 0)].entropy(), 2);
        assert_eq!(grid[Position::new(0, 1)].entropy(), 2);
    }

    #[test]
    fn test_neighbors_order_left_right_up_down() {
        let grid = full_grid(3, 3);
        let center = grid.neighbors_of(Position::new(1, 1));
        assert_eq!(
            center.as_slice(),
            [
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );

        let corner = grid.neighbors_of(Position::new(2, 2));
        assert_eq!(corner.as_slice(), [Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn test_neighbors_with_direction() {
        let grid = full_grid(2, 1);
        let neighbors = grid.neighbors_with_direction(Position::new(0, 0));
        assert_eq!(
            neighbors.as_slice(),
            [(Direction::Right, Position::new(1, 0))]
        );
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = full_grid(1, 1);
        assert!(grid.neighbors_of(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_all_collapsed_is_idempotent() {
        let mut grid = full_grid(2, 1);
        assert!(!grid.all_collapsed());
        assert!(!grid.all_collapsed());

        grid[Position::new(0, 0)].collapse_to(TileKind::Water);
        grid[Position::new(1, 0)].collapse_to(TileKind::Land);
        assert!(grid.all_collapsed());
        assert!(grid.all_collapsed());
        assert_eq!(grid.count_tile(TileKind::Water), 1);
        assert_eq!(grid.count_tile(TileKind::Land), 1);
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = full_grid(2, 2);
        assert_eq!(
            grid.positions().collect::<Vec<_>>(),
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_out_of_bounds_panics() {
        let grid = full_grid(2, 2);
        let _ = grid.get(Position::new(2, 0));
    }

    #[test]
    #[should_panic(expected = "grid width must be positive")]
    fn test_zero_width_panics() {
        let _ = full_grid(0, 3);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: TileGrid = "
            ~.?
            wl?
        "
        .parse()
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.resolved_tile(Position::new(0, 0)), Some(TileKind::Water));
        assert_eq!(grid.resolved_tile(Position::new(1, 0)), Some(TileKind::Land));
        assert_eq!(grid[Position::new(0, 1)].entropy(), 1);
        assert!(!grid[Position::new(0, 1)].is_collapsed());
        assert_eq!(grid.to_string(), "~.?\nwl?");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<TileGrid>(), Err(GridParseError::Empty));
        assert_eq!(
            "??\n?".parse::<TileGrid>(),
            Err(GridParseError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "?x".parse::<TileGrid>(),
            Err(GridParseError::InvalidCell { ch: 'x', x: 1, y: 0 })
        );
    }

    proptest! {
        #[test]
        fn test_neighbors_are_adjacent_and_in_bounds(
            width in 1usize..12,
            height in 1usize..12,
            x in 0usize..12,
            y in 0usize..12
        ) {
            let grid = full_grid(width, height);
            let pos = Position::new(x % width, y % height);
            let neighbors = grid.neighbors_of(pos);
            prop_assert!(neighbors.len() <= 4);
            for neighbor in neighbors {
                prop_assert!(grid.contains(neighbor));
                let dist = neighbor.x().abs_diff(pos.x()) + neighbor.y().abs_diff(pos.y());
                prop_assert_eq!(dist, 1);
            }
        }

        #[test]
        fn test_display_parse_preserves_state(
            width in 1usize..8,
            height in 1usize..8,
            picks in proptest::collection::vec(0u8..4, 64)
        ) {
            let mut grid = full_grid(width, height);
            let positions = grid.positions().collect::<Vec<_>>();
            for (pos, pick) in positions.into_iter().zip(picks) {
                match pick {
                    0 => grid[pos].collapse_to(TileKind::Water),
                    1 => grid[pos].collapse_to(TileKind::Land),
                    2 => grid[pos].restrict(TileCandidates::single(TileKind::Land)),
                    _ => {}
                }
            }
            let parsed: TileGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
