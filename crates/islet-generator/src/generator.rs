use islet_core::TileGrid;
use islet_solver::{CollapseSolver, SolverError};

use crate::{DecorationPlacement, GenerationSession, MapConfig, MapSeed, MapSnapshot};

/// A finished map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    /// The fully collapsed grid.
    pub grid: TileGrid,
    /// Decorations placed on its land.
    pub decorations: Vec<DecorationPlacement>,
    /// The seed that reproduces this map.
    pub seed: MapSeed,
}

impl GeneratedMap {
    /// Returns a serializable view of the map.
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::new(&self.grid, &self.decorations, self.seed)
    }
}

/// Generates whole maps in one call.
///
/// Each call runs a fresh [`GenerationSession`] to completion with the
/// borrowed solver and the stored configuration.
///
/// # Examples
///
/// ```
/// use islet_generator::{MapConfig, MapGenerator, MapSeed};
/// use islet_solver::CollapseSolver;
///
/// let solver = CollapseSolver::permissive();
/// let generator = MapGenerator::new(&solver, MapConfig::default());
///
/// let seed = MapSeed::from_phrase("twice");
/// let a = generator.generate_with_seed(seed)?;
/// let b = generator.generate_with_seed(seed)?;
/// assert_eq!(a, b);
/// # Ok::<(), islet_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MapGenerator<'a> {
    solver: &'a CollapseSolver,
    config: MapConfig,
}

impl<'a> MapGenerator<'a> {
    /// Creates a generator.
    ///
    /// # Panics
    ///
    /// Panics if `config` does not pass [`MapConfig::validate`].
    #[must_use]
    pub fn new(solver: &'a CollapseSolver, config: MapConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid map config: {err}");
        }
        Self { solver, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Generates a map from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the solver gets stuck.
    pub fn generate(&self) -> Result<GeneratedMap, SolverError> {
        self.generate_with_seed(MapSeed::random())
    }

    /// Generates the map determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the solver gets stuck.
    pub fn generate_with_seed(&self, seed: MapSeed) -> Result<GeneratedMap, SolverError> {
        let mut session = GenerationSession::new(self.config.clone(), self.solver.clone(), seed);
        session.run_to_completion()?;
        Ok(session.into_map())
    }
}

#[cfg(test)]
mod tests {
    use islet_core::TileKind;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_generate_completes() {
        let solver = CollapseSolver::permissive();
        let generator = MapGenerator::new(&solver, MapConfig::default());
        let map = generator.generate().unwrap();
        assert!(map.grid.all_collapsed());
        assert_eq!(map.grid.len(), 300);
        assert!(map.decorations.len() <= 10);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let solver = CollapseSolver::permissive();
        let generator = MapGenerator::new(&solver, MapConfig::default());
        let a = generator.generate_with_seed(MapSeed::from_phrase("a")).unwrap();
        let b = generator.generate_with_seed(MapSeed::from_phrase("b")).unwrap();
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_single_tile_config() {
        let solver = CollapseSolver::permissive();
        let config = MapConfig {
            tiles: vec![TileKind::Water],
            ..MapConfig::default()
        };
        let map = MapGenerator::new(&solver, config)
            .generate_with_seed(MapSeed::from_phrase("sea"))
            .unwrap();
        assert_eq!(map.grid.count_tile(TileKind::Water), map.grid.len());
        assert!(map.decorations.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_seed_determines_map(
            bytes in any::<[u8; 32]>(),
            width in 1usize..16,
            height in 1usize..16
        ) {
            let solver = CollapseSolver::permissive();
            let config = MapConfig { width, height, ..MapConfig::default() };
            let generator = MapGenerator::new(&solver, config);
            let seed = MapSeed::from_bytes(bytes);

            let a = generator.generate_with_seed(seed).unwrap();
            let b = generator.generate_with_seed(seed).unwrap();

            prop_assert!(a.grid.all_collapsed());
            prop_assert_eq!(a.seed, seed);
            prop_assert_eq!(a, b);
        }
    }
}
