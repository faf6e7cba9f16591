use islet_core::{Cell, TileGrid, TileKind};
use serde::{Deserialize, Serialize};

use crate::{DecorationPlacement, MapSeed};

/// One cell of a [`MapSnapshot`].
///
/// `tiles` lists the remaining candidates in pick order. A collapsed cell has
/// exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCell {
    /// Whether the cell has been collapsed.
    pub collapsed: bool,
    /// Remaining candidates.
    pub tiles: Vec<TileKind>,
}

impl SnapshotCell {
    /// Returns the tile the cell collapsed to.
    #[must_use]
    pub fn resolved(&self) -> Option<TileKind> {
        match (self.collapsed, self.tiles.as_slice()) {
            (true, [kind]) => Some(*kind),
            _ => None,
        }
    }
}

impl From<&Cell> for SnapshotCell {
    fn from(cell: &Cell) -> Self {
        Self {
            collapsed: cell.is_collapsed(),
            tiles: cell.possible_tiles().iter().collect(),
        }
    }
}

/// A plain-data view of a map for renderers and JSON output.
///
/// `rows[y][x]` describes the cell at `(x, y)`: its collapsed flag and its
/// remaining candidates, so cells narrowed but not yet collapsed stay visible.
///
/// # Examples
///
/// ```
/// use islet_core::{TileGrid, TileKind};
/// use islet_generator::{MapSeed, MapSnapshot};
///
/// let grid: TileGrid = "~?".parse()?;
/// let snapshot = MapSnapshot::new(&grid, &[], MapSeed::from_phrase("doc"));
/// assert_eq!(snapshot.rows[0][0].resolved(), Some(TileKind::Water));
/// assert_eq!(snapshot.rows[0][1].tiles, [TileKind::Water, TileKind::Land]);
/// # Ok::<(), islet_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// The seed in hex.
    pub seed: String,
    /// Cells, row by row.
    pub rows: Vec<Vec<SnapshotCell>>,
    /// Placed decorations.
    pub decorations: Vec<DecorationPlacement>,
}

impl MapSnapshot {
    /// Captures the current state of `grid`.
    #[must_use]
    pub fn new(grid: &TileGrid, decorations: &[DecorationPlacement], seed: MapSeed) -> Self {
        let cells = grid
            .cells()
            .map(|(_, cell)| SnapshotCell::from(cell))
            .collect::<Vec<_>>();
        let rows = cells.chunks(grid.width()).map(<[_]>::to_vec).collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            seed: seed.to_string(),
            rows,
            decorations: decorations.to_vec(),
        }
    }

    /// Returns the number of collapsed cells.
    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.collapsed)
            .count()
    }

    /// Returns `true` if every cell is collapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rows.iter().flatten().all(|cell| cell.collapsed)
    }
}
