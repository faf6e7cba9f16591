use islet_core::Position;

/// Errors raised while collapsing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A reduction rule removed every candidate of a cell.
    ///
    /// The run is aborted; the emptied set is not written back, so the grid
    /// still holds the last consistent candidates of that cell.
    #[display("contradiction at {position}: no candidate tile remains")]
    Contradiction {
        /// The cell whose candidates would have become empty.
        position: Position,
    },
}
