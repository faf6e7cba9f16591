//! The random source used to pick tiles and positions.

use rand::seq::IteratorRandom as _;

/// A source of uniform index picks.
///
/// The solver only ever needs "choose one of `len` things", so this is the
/// whole seam between the algorithm and randomness. Every [`rand::Rng`]
/// implements it, which lets callers pass a seeded generator; tests can also
/// implement it directly to script the exact picks.
///
/// # Examples
///
/// ```
/// use islet_solver::TileRandom;
///
/// struct AlwaysLast;
///
/// impl TileRandom for AlwaysLast {
///     fn pick_index(&mut self, len: usize) -> usize {
///         len - 1
///     }
/// }
///
/// assert_eq!(AlwaysLast.pick_index(3), 2);
/// ```
pub trait TileRandom {
    /// Returns an index in `0..len`, uniformly distributed.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R> TileRandom for R
where
    R: rand::Rng + ?Sized,
{
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty range");
        (0..len).choose(self).unwrap_or_default()
    }
}
