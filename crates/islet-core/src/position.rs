//! Grid coordinates and neighbour directions.

use std::fmt::{self, Display};

/// A cell coordinate on a [`TileGrid`](crate::TileGrid).
///
/// `x` grows to the right, `y` grows downward; both are zero-based. A position
/// carries no grid dimensions, so bounds are checked by the grid that receives it.
///
/// # Examples
///
/// ```
/// use islet_core::{Direction, Position};
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.offset(Direction::Left), Some(Position::new(2, 1)));
/// assert_eq!(Position::new(0, 0).offset(Direction::Up), None);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from its column and row.
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Returns the adjacent position on the given side.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant. The
    /// upper bounds are the grid's business.
    #[must_use]
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let Self { x, y } = self;
        match direction {
            Direction::Left => x.checked_sub(1).map(|x| Self::new(x, y)),
            Direction::Right => x.checked_add(1).map(|x| Self::new(x, y)),
            Direction::Up => y.checked_sub(1).map(|y| Self::new(x, y)),
            Direction::Down => y.checked_add(1).map(|y| Self::new(x, y)),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal sides of a cell.
///
/// [`Direction::ALL`] is the neighbour order used throughout the crate: left,
/// right, up, down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `x`.
    #[default]
    Left,
    /// Towards larger `x`.
    Right,
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
}

impl Direction {
    /// All directions in neighbour order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];
}
