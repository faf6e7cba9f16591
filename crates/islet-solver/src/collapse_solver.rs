use islet_core::{Position, TileGrid, TileKind};

use crate::{
    SolverError, TileRandom, collapse,
    rule::{BoxedRule, PermissiveRule},
    select_lowest_entropy_cell,
};

/// Statistics collected while collapsing a grid.
///
/// # Examples
///
/// ```
/// use islet_core::{TileCandidates, TileGrid};
/// use islet_solver::CollapseSolver;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let solver = CollapseSolver::permissive();
/// let mut grid = TileGrid::new(4, 3, &TileCandidates::full());
/// let mut rng = Pcg64::seed_from_u64(1);
///
/// let stats = solver.run_to_completion(&mut grid, &mut rng)?;
/// assert_eq!(stats.collapses(), 12);
/// assert_eq!(stats.reductions(), 0);
/// # Ok::<(), islet_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolverStats {
    collapses: usize,
    propagation_pops: usize,
    reductions: usize,
}

impl SolverStats {
    /// Returns the number of cells collapsed.
    #[must_use]
    pub fn collapses(&self) -> usize {
        self.collapses
    }

    /// Returns the number of positions popped from propagation worklists.
    #[must_use]
    pub fn propagation_pops(&self) -> usize {
        self.propagation_pops
    }

    /// Returns the number of times a neighbour's candidates actually shrank.
    #[must_use]
    pub fn reductions(&self) -> usize {
        self.reductions
    }

    fn record_propagation(&mut self, report: PropagationReport) {
        self.propagation_pops += report.pops;
        self.reductions += report.reductions;
    }
}

/// What a single propagation did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PropagationReport {
    /// Positions popped from the worklist, the origin included.
    pub pops: usize,
    /// Neighbours whose candidates shrank (each one was pushed).
    pub reductions: usize,
}

/// The outcome of one [`CollapseSolver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveStep {
    /// A cell was collapsed and its consequences propagated.
    Collapsed {
        /// The collapsed cell.
        position: Position,
        /// The tile it collapsed to.
        tile: TileKind,
    },
    /// No uncollapsed cell was left; nothing changed.
    Done,
}

/// Drives the observe → propagate loop of wave function collapse.
///
/// Each [`step`](Self::step) picks the lowest-entropy uncollapsed cell,
/// collapses it to a random candidate and propagates the change through the
/// grid with the configured [`ReductionRule`](crate::rule::ReductionRule).
/// [`run_to_completion`](Self::run_to_completion) repeats that until the grid
/// is fully collapsed.
///
/// # Step-by-step
///
/// ```
/// use islet_core::{TileCandidates, TileGrid};
/// use islet_solver::CollapseSolver;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let solver = CollapseSolver::permissive();
/// let mut grid = TileGrid::new(3, 3, &TileCandidates::full());
/// let mut rng = Pcg64::seed_from_u64(9);
/// let mut stats = solver.new_stats();
///
/// while solver.step(&mut grid, &mut rng, &mut stats)?.is_collapsed() {
///     println!("{grid}\n");
/// }
/// assert!(grid.all_collapsed());
/// # Ok::<(), islet_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CollapseSolver {
    rule: BoxedRule,
}

impl Default for CollapseSolver {
    fn default() -> Self {
        Self::permissive()
    }
}

impl CollapseSolver {
    /// Creates a solver that propagates with `rule`.
    #[must_use]
    pub fn new(rule: BoxedRule) -> Self {
        Self { rule }
    }

    /// Creates a solver using [`PermissiveRule`].
    #[must_use]
    pub fn permissive() -> Self {
        Self::new(Box::new(PermissiveRule::new()))
    }

    /// Returns the reduction rule.
    #[must_use]
    pub fn rule(&self) -> &BoxedRule {
        &self.rule
    }

    /// Creates an empty statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SolverStats {
        SolverStats::default()
    }

    /// Propagates the state of `origin` outward.
    ///
    /// Depth-first worklist: the origin is pushed, then each popped position
    /// offers its state to its uncollapsed neighbours through the rule. A
    /// neighbour whose candidate set strictly shrinks is overwritten and pushed.
    /// Every push needs a strict decrease somewhere in the grid, so the loop
    /// ends after at most [`TileGrid::candidate_mass`] pushes.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the rule leaves a neighbour with
    /// no candidate. That neighbour keeps its previous candidates.
    ///
    /// # Panics
    ///
    /// Panics if `origin` is out of bounds.
    pub fn propagate(
        &self,
        grid: &mut TileGrid,
        origin: Position,
    ) -> Result<PropagationReport, SolverError> {
        let mut report = PropagationReport::default();
        let mut stack = vec![origin];

        while let Some(current) = stack.pop() {
            report.pops += 1;
            let source = grid[current].clone();
            for (direction, neighbor) in grid.neighbors_with_direction(current) {
                let cell = &mut grid[neighbor];
                if cell.is_collapsed() {
                    continue;
                }
                let candidates = cell.possible_tiles();
                let reduced =
                    candidates.retain_in(&self.rule.reduce(candidates, &source, direction));
                if reduced.is_empty() {
                    log::debug!(
                        "{} emptied {neighbor} while propagating from {origin}",
                        self.rule.name()
                    );
                    return Err(SolverError::Contradiction { position: neighbor });
                }
                if reduced.len() < candidates.len() {
                    cell.restrict(reduced);
                    report.reductions += 1;
                    stack.push(neighbor);
                }
            }
        }

        log::trace!(
            "propagated from {origin}: {} pops, {} reductions",
            report.pops,
            report.reductions
        );
        Ok(report)
    }

    /// Performs one collapse and its propagation.
    ///
    /// # Returns
    ///
    /// * `Ok(SolveStep::Collapsed { .. })` - a cell was collapsed
    /// * `Ok(SolveStep::Done)` - every cell was already collapsed
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if propagation empties a cell.
    pub fn step<R>(
        &self,
        grid: &mut TileGrid,
        random: &mut R,
        stats: &mut SolverStats,
    ) -> Result<SolveStep, SolverError>
    where
        R: TileRandom + ?Sized,
    {
        let Some(position) = select_lowest_entropy_cell(grid) else {
            return Ok(SolveStep::Done);
        };
        let tile = collapse(grid, position, random);
        stats.collapses += 1;
        let report = self.propagate(grid, position)?;
        stats.record_propagation(report);
        Ok(SolveStep::Collapsed { position, tile })
    }

    /// Collapses the whole grid and returns fresh statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if propagation empties a cell.
    pub fn run_to_completion<R>(
        &self,
        grid: &mut TileGrid,
        random: &mut R,
    ) -> Result<SolverStats, SolverError>
    where
        R: TileRandom + ?Sized,
    {
        let mut stats = self.new_stats();
        self.run_with_stats(grid, random, &mut stats)?;
        Ok(stats)
    }

    /// Collapses the whole grid, accumulating into `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if propagation empties a cell.
    pub fn run_with_stats<R>(
        &self,
        grid: &mut TileGrid,
        random: &mut R,
        stats: &mut SolverStats,
    ) -> Result<(), SolverError>
    where
        R: TileRandom + ?Sized,
    {
        while self.step(grid, random, stats)?.is_collapsed() {}
        debug_assert!(grid.all_collapsed());
        Ok(())
    }
}
