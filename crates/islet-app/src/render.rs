//! Text rendering of maps in progress.

use islet_core::{Position, TileGrid, TileKind};
use islet_generator::{Decoration, DecorationPlacement};

/// Placeholder for cells that are not collapsed yet.
pub const PENDING_GLYPH: char = '?';

/// Renders one frame: collapsed tiles by glyph, anything else as
/// [`PENDING_GLYPH`], with decorations drawn over their tiles.
///
/// When a position holds several decorations the last one is shown.
#[must_use]
pub fn render_frame(grid: &TileGrid, decorations: &[DecorationPlacement]) -> String {
    let mut rows = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    grid.resolved_tile(Position::new(x, y))
                        .map_or(PENDING_GLYPH, TileKind::glyph)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    for placement in decorations {
        rows[placement.position.y()][placement.position.x()] = placement.decoration.glyph();
    }
    rows.into_iter()
        .map(String::from_iter)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Counts trees and buildings.
#[must_use]
pub fn decoration_counts(decorations: &[DecorationPlacement]) -> (usize, usize) {
    decorations
        .iter()
        .fold((0, 0), |(trees, buildings), placement| match placement.decoration {
            Decoration::Tree => (trees + 1, buildings),
            Decoration::Building => (trees, buildings + 1),
        })
}
