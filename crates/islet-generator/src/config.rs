use islet_core::{TileCandidates, TileKind};
use serde::{Deserialize, Serialize};

/// Default map width in cells.
pub const DEFAULT_WIDTH: usize = 20;
/// Default map height in cells.
pub const DEFAULT_HEIGHT: usize = 15;
/// Default number of decoration attempts.
pub const DEFAULT_DECORATION_COUNT: usize = 10;

/// The shape and contents of a map to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Initial candidates of every cell, in pick order.
    pub tiles: Vec<TileKind>,
    /// Positions sampled (with replacement) for decorations.
    pub decoration_count: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tiles: TileKind::ALL.to_vec(),
            decoration_count: DEFAULT_DECORATION_COUNT,
        }
    }
}

impl MapConfig {
    /// Checks that the configuration describes a non-empty map.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking width, height, then tiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.tiles.is_empty() {
            return Err(ConfigError::NoTiles);
        }
        for (i, kind) in self.tiles.iter().enumerate() {
            if self.tiles[..i].contains(kind) {
                return Err(ConfigError::DuplicateTile(*kind));
            }
        }
        Ok(())
    }

    /// Returns the candidate set every cell starts with.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` holds the same kind twice.
    #[must_use]
    pub fn initial_candidates(&self) -> TileCandidates {
        TileCandidates::from_kinds(self.tiles.iter().copied())
    }
}

/// Reasons a [`MapConfig`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The width is zero.
    #[display("map width must be positive")]
    ZeroWidth,
    /// The height is zero.
    #[display("map height must be positive")]
    ZeroHeight,
    /// No initial tile kind was given.
    #[display("at least one tile kind is required")]
    NoTiles,
    /// A tile kind is listed more than once.
    #[display("tile kind {_0} is listed more than once")]
    DuplicateTile(#[error(not(source))] TileKind),
}
