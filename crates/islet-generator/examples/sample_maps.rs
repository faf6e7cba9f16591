//! Samples many maps in parallel and prints the one closest to a land ratio.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sample_maps
//! ```
//!
//! Look for a map that is about one third land, out of 5000 samples:
//!
//! ```sh
//! cargo run --example sample_maps -- --land-ratio 0.33 --max-tries 5000
//! ```

use std::process;

use clap::Parser;
use islet_core::TileKind;
use islet_generator::{GeneratedMap, MapConfig, MapGenerator};
use islet_solver::CollapseSolver;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Map width in cells.
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Map height in cells.
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Target share of land tiles, between 0 and 1.
    #[arg(long, value_name = "RATIO", default_value_t = 0.5)]
    land_ratio: f64,

    /// Maximum maps to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }
    if !(0.0..=1.0).contains(&args.land_ratio) {
        eprintln!("--land-ratio must be between 0 and 1.");
        process::exit(1);
    }

    let config = MapConfig {
        width: args.width,
        height: args.height,
        ..MapConfig::default()
    };
    if let Err(err) = config.validate() {
        eprintln!("{err}");
        process::exit(2);
    }

    let solver = CollapseSolver::permissive();
    let generator = MapGenerator::new(&solver, config);

    let best = (0..args.max_tries)
        .into_par_iter()
        .filter_map(|_| generator.generate().ok())
        .map(|map| {
            let distance = (land_ratio(&map) - args.land_ratio).abs();
            (map, distance)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1));

    let Some((map, distance)) = best else {
        eprintln!("No map could be generated.");
        process::exit(1);
    };

    println!("Seed:");
    println!("  {}", map.seed);
    println!();
    println!("Land ratio: {:.3} (off by {distance:.3})", land_ratio(&map));
    println!("Decorations: {}", map.decorations.len());
    println!();
    println!("{}", map.grid);
}

#[expect(clippy::cast_precision_loss)]
fn land_ratio(map: &GeneratedMap) -> f64 {
    map.grid.count_tile(TileKind::Land) as f64 / map.grid.len() as f64
}
