use islet_core::{Position, TileGrid, TileKind};
use islet_solver::{CollapseSolver, SolveStep, SolverError, SolverStats};
use rand_pcg::Pcg64;

use crate::{
    DecorationPlacement, GeneratedMap, MapConfig, MapSeed, MapSnapshot, place_decorations,
};

/// Permission to advance one particular run of a [`GenerationSession`].
///
/// Tokens are tied to the session epoch they were issued in. Calling
/// [`GenerationSession::regenerate`] starts a new epoch, after which every
/// older token is rejected with [`SessionError::Cancelled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken {
    epoch: u64,
}

impl RunToken {
    /// Returns the epoch this token was issued for.
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// What one [`GenerationSession::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// `true` once the grid is complete and decorated.
    pub done: bool,
    /// The cell collapsed by this step, if any.
    pub collapsed: Option<(Position, TileKind)>,
}

/// Errors from driving a [`GenerationSession`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The token belongs to a run that was replaced by [`GenerationSession::regenerate`].
    #[display("run was cancelled by regeneration")]
    #[from(ignore)]
    Cancelled,
    /// The solver hit a contradiction; the run cannot continue.
    #[display("generation failed: {_0}")]
    Solver(SolverError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Done,
    Failed(SolverError),
}

/// One map being generated.
///
/// Owns the grid, a random generator seeded from a [`MapSeed`], solver
/// statistics and the decorations placed at the end. All mutation goes
/// through `&mut self`, so a host sharing the session between threads wraps
/// it in a single mutex.
///
/// # Stepped generation
///
/// ```
/// use islet_generator::{GenerationSession, MapConfig, MapSeed};
/// use islet_solver::CollapseSolver;
///
/// let config = MapConfig { width: 4, height: 3, ..MapConfig::default() };
/// let mut session =
///     GenerationSession::new(config, CollapseSolver::permissive(), MapSeed::from_phrase("demo"));
/// let token = session.token();
///
/// let mut frames = 0;
/// while !session.step(token)?.done {
///     frames += 1;
/// }
/// assert_eq!(frames, 12);
/// assert!(session.is_done());
/// # Ok::<(), islet_generator::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GenerationSession {
    config: MapConfig,
    solver: CollapseSolver,
    seed: MapSeed,
    rng: Pcg64,
    grid: TileGrid,
    stats: SolverStats,
    decorations: Vec<DecorationPlacement>,
    epoch: u64,
    state: SessionState,
}

impl GenerationSession {
    /// Creates a session with a fresh grid.
    ///
    /// # Panics
    ///
    /// Panics if `config` does not pass [`MapConfig::validate`].
    #[must_use]
    pub fn new(config: MapConfig, solver: CollapseSolver, seed: MapSeed) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid map config: {err}");
        }
        let grid = TileGrid::new(config.width, config.height, &config.initial_candidates());
        let stats = solver.new_stats();
        log::debug!(
            "new session {}x{} with seed {seed}",
            config.width,
            config.height
        );
        Self {
            config,
            solver,
            seed,
            rng: seed.rng(),
            grid,
            stats,
            decorations: Vec::new(),
            epoch: 0,
            state: SessionState::Running,
        }
    }

    /// Returns a token for the current run.
    #[must_use]
    pub fn token(&self) -> RunToken {
        RunToken { epoch: self.epoch }
    }

    /// Performs one collapse and propagation.
    ///
    /// The step that finds no uncollapsed cell places the decorations and
    /// reports `done`. Later steps keep reporting `done` without changes.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Cancelled`] if `token` is from an earlier run; the
    ///   grid is left untouched.
    /// - [`SessionError::Solver`] if the solver hit a contradiction, on this
    ///   step or an earlier one.
    pub fn step(&mut self, token: RunToken) -> Result<StepResult, SessionError> {
        if token.epoch != self.epoch {
            log::debug!("rejected step for epoch {} (current {})", token.epoch, self.epoch);
            return Err(SessionError::Cancelled);
        }
        match self.state {
            SessionState::Running => {}
            SessionState::Done => {
                return Ok(StepResult {
                    done: true,
                    collapsed: None,
                });
            }
            SessionState::Failed(err) => return Err(err.into()),
        }

        match self
            .solver
            .step(&mut self.grid, &mut self.rng, &mut self.stats)
        {
            Ok(SolveStep::Collapsed { position, tile }) => Ok(StepResult {
                done: false,
                collapsed: Some((position, tile)),
            }),
            Ok(SolveStep::Done) => {
                self.decorations =
                    place_decorations(&self.grid, self.config.decoration_count, &mut self.rng);
                self.state = SessionState::Done;
                log::debug!(
                    "session {} done: {} collapses, {} decorations",
                    self.seed,
                    self.stats.collapses(),
                    self.decorations.len()
                );
                Ok(StepResult {
                    done: true,
                    collapsed: None,
                })
            }
            Err(err) => {
                log::debug!("session {} failed: {err}", self.seed);
                self.state = SessionState::Failed(err);
                Err(err.into())
            }
        }
    }

    /// Steps the current run until it is done.
    ///
    /// Performs exactly the operations repeated [`step`](Self::step) calls
    /// would, so both modes give the same map for the same seed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the solver gets stuck.
    pub fn run_to_completion(&mut self) -> Result<(), SolverError> {
        let token = self.token();
        loop {
            match self.step(token) {
                Ok(StepResult { done: true, .. }) => return Ok(()),
                Ok(_) => {}
                Err(SessionError::Solver(err)) => return Err(err),
                Err(SessionError::Cancelled) => {
                    unreachable!("token was issued for the current epoch")
                }
            }
        }
    }

    /// Discards the current run and starts over with `seed`.
    ///
    /// Every token issued before this call is invalidated. The configuration
    /// and solver are kept; grid, statistics and decorations are reset.
    pub fn regenerate(&mut self, seed: MapSeed) -> RunToken {
        self.epoch = self.epoch.wrapping_add(1);
        self.seed = seed;
        self.rng = seed.rng();
        self.grid = TileGrid::new(
            self.config.width,
            self.config.height,
            &self.config.initial_candidates(),
        );
        self.stats = self.solver.new_stats();
        self.decorations.clear();
        self.state = SessionState::Running;
        log::debug!("regenerating (epoch {}) with seed {seed}", self.epoch);
        self.token()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Returns the grid in its current state.
    #[must_use]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Returns the decorations; empty until the run is done.
    #[must_use]
    pub fn decorations(&self) -> &[DecorationPlacement] {
        &self.decorations
    }

    /// Returns the seed of the current run.
    #[must_use]
    pub fn seed(&self) -> MapSeed {
        self.seed
    }

    /// Returns the solver statistics of the current run.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Returns `true` once the current run is complete and decorated.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.state, SessionState::Done)
    }

    /// Returns a serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::new(&self.grid, &self.decorations, self.seed)
    }

    /// Consumes the session and returns its map.
    #[must_use]
    pub fn into_map(self) -> GeneratedMap {
        GeneratedMap {
            grid: self.grid,
            decorations: self.decorations,
            seed: self.seed,
        }
    }
}
