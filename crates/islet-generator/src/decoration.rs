use islet_core::{Position, TileGrid, TileKind};
use islet_solver::TileRandom;
use serde::{Deserialize, Serialize};

/// An object placed on top of a land tile after collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    /// A tree.
    #[display("tree")]
    Tree,
    /// A building.
    #[display("building")]
    Building,
}

impl Decoration {
    /// Every decoration, in pick order.
    pub const ALL: [Self; 2] = [Self::Tree, Self::Building];

    /// Returns the character used in text renders.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Tree => 'T',
            Self::Building => 'B',
        }
    }
}

/// A decoration at a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationPlacement {
    /// Where the decoration stands.
    pub position: Position,
    /// What stands there.
    pub decoration: Decoration,
}

/// Scatters decorations over the land of a collapsed grid.
///
/// Samples `count` positions uniformly with replacement (column first, then
/// row). Each sample that lands on a collapsed [`TileKind::Land`] cell gets a
/// uniformly chosen [`Decoration`]; other samples are dropped. The same
/// position may be decorated more than once. The grid itself is never
/// modified.
///
/// # Examples
///
/// ```
/// use islet_core::TileGrid;
/// use islet_generator::place_decorations;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let grid: TileGrid = "~~~\n~~~".parse()?;
/// let placed = place_decorations(&grid, 10, &mut Pcg64::seed_from_u64(0));
/// assert!(placed.is_empty());
/// # Ok::<(), islet_core::GridParseError>(())
/// ```
pub fn place_decorations<R>(
    grid: &TileGrid,
    count: usize,
    random: &mut R,
) -> Vec<DecorationPlacement>
where
    R: TileRandom + ?Sized,
{
    let mut placements = Vec::new();
    for _ in 0..count {
        let x = random.pick_index(grid.width());
        let y = random.pick_index(grid.height());
        let position = Position::new(x, y);
        if grid.resolved_tile(position) != Some(TileKind::Land) {
            continue;
        }
        let decoration = Decoration::ALL[random.pick_index(Decoration::ALL.len())];
        log::trace!("placed {decoration} at {position}");
        placements.push(DecorationPlacement {
            position,
            decoration,
        });
    }
    placements
}
