use clap::{Parser, ValueEnum};
use islet_core::TileKind;
use islet_generator::{DEFAULT_DECORATION_COUNT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MapConfig, MapSeed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Character grid with a short header.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Generate water and land tile maps with wave function collapse.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Map width in cells.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Initial tile kinds of every cell, in pick order.
    #[arg(long, value_name = "KIND", value_delimiter = ',', default_values_t = TileKind::ALL)]
    pub tiles: Vec<TileKind>,

    /// Positions sampled for trees and buildings after collapse.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_DECORATION_COUNT)]
    pub decorations: usize,

    /// Seed of the first map, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<MapSeed>,

    /// Derive the first seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,

    /// Number of maps to generate, regenerating the same session each time.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pub maps: usize,

    /// Print a frame after every collapse.
    #[arg(long)]
    pub animate: bool,

    /// Pause between animation frames.
    #[arg(long, value_name = "MS", default_value_t = 10)]
    pub frame_delay_ms: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    #[must_use]
    pub fn config(&self) -> MapConfig {
        MapConfig {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
            decoration_count: self.decorations,
        }
    }

    /// Returns the seed of the first map: explicit, from the phrase, or random.
    #[must_use]
    pub fn initial_seed(&self) -> MapSeed {
        match (&self.seed, &self.phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => MapSeed::from_phrase(phrase),
            (None, None) => MapSeed::random(),
        }
    }
}
